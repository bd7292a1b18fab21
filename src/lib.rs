//! # ctint
//!
//! Lexer and syntax-classification engine for C-like source. One pass over
//! an in-memory buffer yields an ordered, contiguous sequence of
//! `(span, category)` annotations covering every byte, plus a side channel
//! of recoverable lexical and structural errors. No parse tree is built and
//! malformed input never aborts a scan.
//!
//! ```
//! let result = ctint::classify("int x = 40 + 2;");
//! assert!(result.ok());
//! ```
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! classify  → categories, region tracking, classifier, engine
//!   ↓
//! emit      → ordered annotation assembly
//!   ↓
//! scanner   → Logos lexer, directive analysis, TokenKind
//!   ↓
//! errors    → LexError, ErrorKind, diagnostic codes
//!   ↓
//! base      → Primitives (TextRange, LineIndex)
//! ```

// ============================================================================
// MODULES (dependency order: base → errors → scanner → emit → classify)
// ============================================================================

/// Foundation types: TextRange/TextSize, LineIndex
pub mod base;

/// Diagnostics: LexError, ErrorKind, codes, severities
pub mod errors;

/// Scanner: Logos lexer, tokens, preprocessor directive analysis
pub mod scanner;

/// Emitter: ordered (span, category) annotation assembly
pub mod emit;

/// Classification: Category, RegionTracker, Classifier, engine entry points
pub mod classify;

// Re-export the whole public surface at the crate root
pub use base::{LineCol, LineIndex};
pub use classify::{
    classify, classify_with, Category, Classified, Classifier, Options, Region, RegionKind,
    RegionTracker, TypeNameTable,
};
pub use emit::{Annotation, Emitter};
pub use errors::{ErrorKind, LexError, Severity};
pub use scanner::{
    parse_directive, scan, tokenize, Directive, DirectiveKind, Scanner, Token, TokenKind,
};
pub use text_size::{TextRange, TextSize};
