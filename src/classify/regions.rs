//! Nesting-region tracker
//!
//! A single stack models every construct that opens and later closes:
//! brace/paren/bracket delimiters and preprocessor conditionals. The two
//! families interleave freely in real C (`{ #if } #endif` is legal), so a
//! closer only ever matches frames of its own family and steps over the
//! other family silently.

use text_size::TextRange;
use tracing::trace;

use crate::errors::{ErrorKind, LexError};

/// What kind of construct a stack frame represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    Brace,
    Paren,
    Bracket,
    /// `#if`/`#ifdef`/`#ifndef` through `#endif`
    Conditional,
    BlockComment,
    Str,
}

impl RegionKind {
    /// Brace, paren, and bracket form one family: a `}` can recover a
    /// mismatched `(`, but never touches a conditional frame.
    pub fn is_delimiter(self) -> bool {
        matches!(self, Self::Brace | Self::Paren | Self::Bracket)
    }

    fn same_family(self, other: Self) -> bool {
        (self.is_delimiter() && other.is_delimiter()) || self == other
    }
}

/// One open construct
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub kind: RegionKind,
    /// Range of the token that opened the region
    pub range: TextRange,
    /// False inside a conditional branch known to be compiled out
    pub active: bool,
    cond: Option<Branch>,
}

/// Liveness bookkeeping for one `#if`..`#endif` chain
#[derive(Debug, Clone, Copy)]
struct Branch {
    /// Some earlier branch of this chain was definitely taken
    any_true: bool,
}

#[derive(Debug, Default)]
pub struct RegionTracker {
    stack: Vec<Region>,
}

impl RegionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a delimiter region
    pub fn push(&mut self, kind: RegionKind, range: TextRange) {
        let active = !self.in_inactive_conditional();
        self.stack.push(Region {
            kind,
            range,
            active,
            cond: None,
        });
    }

    /// Open a conditional region
    ///
    /// `known` is the decided value of the condition, or `None` when it
    /// cannot be evaluated. Undecidable branches stay presumed-live.
    pub fn open_conditional(&mut self, range: TextRange, known: Option<bool>) {
        let outer_live = !self.in_inactive_conditional();
        let live = known != Some(false);
        self.stack.push(Region {
            kind: RegionKind::Conditional,
            range,
            active: outer_live && live,
            cond: Some(Branch {
                any_true: known == Some(true),
            }),
        });
    }

    /// Switch the innermost conditional to an `#elif` branch
    ///
    /// Returns false when no conditional is open.
    pub fn enter_elif(&mut self, known: Option<bool>) -> bool {
        let Some(idx) = self.innermost_conditional() else {
            return false;
        };
        let outer_live = !self.stack[..idx]
            .iter()
            .any(|r| r.kind == RegionKind::Conditional && !r.active);
        let region = &mut self.stack[idx];
        if let Some(branch) = region.cond.as_mut() {
            let live = !branch.any_true && known != Some(false);
            branch.any_true |= known == Some(true);
            region.active = outer_live && live;
        }
        true
    }

    /// Switch the innermost conditional to its `#else` branch
    pub fn enter_else(&mut self) -> bool {
        let Some(idx) = self.innermost_conditional() else {
            return false;
        };
        let outer_live = !self.stack[..idx]
            .iter()
            .any(|r| r.kind == RegionKind::Conditional && !r.active);
        let region = &mut self.stack[idx];
        if let Some(branch) = region.cond.as_mut() {
            let live = !branch.any_true;
            branch.any_true = true;
            region.active = outer_live && live;
        }
        true
    }

    /// Close the nearest region matching `kind`
    ///
    /// Frames of the other family are stepped over untouched. A
    /// same-family frame of the wrong kind means mismatched nesting: the
    /// nearest exact match deeper in the stack is removed so later closers
    /// still pair up, and the call reports `false` for the caller to turn
    /// into a diagnostic. `false` with nothing removed means no region of
    /// this kind was open at all.
    pub fn pop(&mut self, kind: RegionKind) -> bool {
        let Some(idx) = self
            .stack
            .iter()
            .rposition(|r| r.kind.same_family(kind))
        else {
            return false;
        };
        if self.stack[idx].kind == kind {
            self.stack.remove(idx);
            return true;
        }
        // wrong closer for the innermost frame of this family
        let open = self.stack[idx].kind;
        if let Some(exact) = self.stack[..idx].iter().rposition(|r| r.kind == kind) {
            self.stack.remove(exact);
            trace!(?open, closed = ?kind, "mismatched closer; recovered deeper frame");
        }
        false
    }

    /// True inside any conditional branch known to be compiled out
    pub fn in_inactive_conditional(&self) -> bool {
        self.stack
            .iter()
            .any(|r| r.kind == RegionKind::Conditional && !r.active)
    }

    /// Number of open regions of every kind
    pub fn current_depth(&self) -> usize {
        self.stack.len()
    }

    /// Number of open brace/paren/bracket regions
    pub fn delimiter_depth(&self) -> usize {
        self.stack.iter().filter(|r| r.kind.is_delimiter()).count()
    }

    /// Kind of the innermost open region
    pub fn innermost_kind(&self) -> Option<RegionKind> {
        self.stack.last().map(|r| r.kind)
    }

    /// Kind of the innermost open delimiter, stepping over conditionals
    pub fn innermost_delimiter(&self) -> Option<RegionKind> {
        self.stack
            .iter()
            .rev()
            .find(|r| r.kind.is_delimiter())
            .map(|r| r.kind)
    }

    pub fn regions(&self) -> &[Region] {
        &self.stack
    }

    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drain every still-open region into end-of-input diagnostics
    ///
    /// Comment and string regions are skipped: the scanner already reported
    /// those as unterminated when it recovered them.
    pub fn finish(&mut self) -> Vec<LexError> {
        self.stack
            .drain(..)
            .filter(|region| {
                !matches!(region.kind, RegionKind::BlockComment | RegionKind::Str)
            })
            .map(|region| LexError::new(ErrorKind::UnclosedDelimiter, region.range))
            .collect()
    }

    fn innermost_conditional(&self) -> Option<usize> {
        self.stack
            .iter()
            .rposition(|r| r.kind == RegionKind::Conditional)
    }
}
