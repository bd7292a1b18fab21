//! Common C source fixtures and assertion helpers for tests.
//!
//! Included by every integration test binary; not all of them use every
//! item here.
#![allow(dead_code)]

use ctint::{Category, Classified, TextSize};

pub const HELLO_WORLD: &str = r#"
#include <stdio.h>

int main(void) {
    printf("hello, world\n");
    return 0;
}
"#;

pub const TYPEDEF_PAIR: &str = r#"
typedef unsigned int uint;
uint counter = 0;
"#;

pub const CONDITIONAL_SECTIONS: &str = r#"
#if 0
int disabled(void) { return -1; }
#else
int enabled(void) { return 1; }
#endif
"#;

// Structural recovery: `}` closes the brace early, `)` still pairs up
pub const MISMATCHED_DELIMS: &str = "{ ( } )";

/// Every byte of the input belongs to exactly one annotation, in order.
pub fn assert_full_coverage(source: &str, result: &Classified) {
    let mut expected = TextSize::new(0);
    for annotation in &result.annotations {
        assert_eq!(
            annotation.range.start(),
            expected,
            "gap or overlap before {:?}",
            annotation.range
        );
        assert!(
            !annotation.range.is_empty(),
            "empty annotation at {:?}",
            annotation.range
        );
        expected = annotation.range.end();
    }
    assert_eq!(expected, TextSize::of(source), "coverage stops early");
}

/// Category of the first annotation whose text equals `needle`.
pub fn category_of(result: &Classified, source: &str, needle: &str) -> Category {
    nth_category_of(result, source, needle, 0)
}

/// Category of the nth (zero-based) annotation whose text equals `needle`.
pub fn nth_category_of(
    result: &Classified,
    source: &str,
    needle: &str,
    n: usize,
) -> Category {
    let mut seen = 0;
    for annotation in &result.annotations {
        if &source[annotation.range] == needle {
            if seen == n {
                return annotation.category;
            }
            seen += 1;
        }
    }
    panic!("occurrence {n} of {needle:?} not found in {source:?}");
}
