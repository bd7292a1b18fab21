//! Recoverable diagnostics reported alongside classification output.
//!
//! Every error here is recoverable: the engine always returns a full
//! annotation sequence covering the input, and errors accumulate in a
//! side-channel list. Codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (unterminated literals, malformed numbers)
//! - E02xx: Structural errors (delimiter mismatches)

use std::fmt;

use text_size::TextRange;
use thiserror::Error;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Source is malformed in a way no edit-in-progress explains
    #[default]
    Error,
    /// Likely in-progress editing; rendering degrades gracefully
    Warning,
}

impl Severity {
    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// The kinds of recoverable errors the engine reports
///
/// Each kind carries a stable code, a severity, and a category,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// String literal with no closing quote before end of line or input
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Character literal with no closing quote before end of line or input
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// Block comment with no `*/` before end of input
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// Token that starts like a number but is not one (`0x`, `1.2.3`)
    #[error("malformed numeric literal")]
    MalformedNumericLiteral,
    /// Closing delimiter with no matching opener
    #[error("unmatched closing delimiter")]
    UnmatchedCloser,
    /// Opening delimiter still unclosed at end of input
    #[error("unclosed delimiter")]
    UnclosedDelimiter,
}

impl ErrorKind {
    /// Get the stable code for this error kind (e.g., "E0102")
    pub fn code(&self) -> &'static str {
        match self {
            // Lexical
            Self::UnterminatedString => "E0102",
            Self::UnterminatedComment => "E0103",
            Self::MalformedNumericLiteral => "E0104",
            Self::UnterminatedChar => "E0105",
            // Structural
            Self::UnclosedDelimiter => "E0202",
            Self::UnmatchedCloser => "E0205",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::UnterminatedString
            | Self::UnterminatedChar
            | Self::UnterminatedComment
            | Self::MalformedNumericLiteral => "lexical error",
            Self::UnmatchedCloser | Self::UnclosedDelimiter => "structural error",
        }
    }

    /// Default severity for this kind
    ///
    /// Unterminated literals and unclosed delimiters read as code still
    /// being typed; mismatched closers and bad numbers do not.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnterminatedString
            | Self::UnterminatedChar
            | Self::UnterminatedComment
            | Self::UnclosedDelimiter => Severity::Warning,
            Self::MalformedNumericLiteral | Self::UnmatchedCloser => Severity::Error,
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::UnmatchedCloser | Self::UnclosedDelimiter)
    }
}

/// A recoverable error tied to a source range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LexError {
    pub kind: ErrorKind,
    pub range: TextRange,
}

impl LexError {
    pub fn new(kind: ErrorKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Severity of this error
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {:?}", self.kind.code(), self.kind, self.range)
    }
}

impl std::error::Error for LexError {}
