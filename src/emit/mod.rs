//! Annotation assembly
//!
//! Collects (span, category) pairs in source order. Contiguity over the
//! whole input comes from the scanner's full byte coverage; this layer
//! guards the ordering invariant and optionally merges adjacent spans of
//! the same category into one.

use text_size::TextRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::classify::Category;

/// One classified span of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    pub range: TextRange,
    pub category: Category,
}

impl Annotation {
    pub fn new(range: TextRange, category: Category) -> Self {
        Self { range, category }
    }

    pub fn len(&self) -> u32 {
        self.range.len().into()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Ordered annotation builder
#[derive(Debug, Default)]
pub struct Emitter {
    annotations: Vec<Annotation>,
    compact: bool,
}

impl Emitter {
    /// `compact` merges runs of same-category annotations into one span
    pub fn new(compact: bool) -> Self {
        Self {
            annotations: Vec::new(),
            compact,
        }
    }

    pub fn push(&mut self, range: TextRange, category: Category) {
        if let Some(last) = self.annotations.last_mut() {
            debug_assert!(
                last.range.end() <= range.start(),
                "annotations must arrive in source order"
            );
            if self.compact && last.category == category && last.range.end() == range.start() {
                last.range = TextRange::new(last.range.start(), range.end());
                return;
            }
        }
        self.annotations.push(Annotation::new(range, category));
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn finish(self) -> Vec<Annotation> {
        self.annotations
    }
}
