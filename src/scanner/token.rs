//! Token kinds and the source-borrowing token type.

use text_size::TextRange;

/// All raw token kinds the scanner produces
///
/// Kinds describe lexical shape only. Context-sensitive meaning (keyword
/// vs identifier, pointer declarator vs multiplication) is the
/// classifier's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    Whitespace,
    LineComment,
    BlockComment,

    // =========================================================================
    // PREPROCESSOR
    // =========================================================================
    /// A full `#...` line (continuations included), `#` at line start
    Directive,

    // =========================================================================
    // NAMES & LITERALS
    // =========================================================================
    Ident,
    Int,
    Float,
    /// Digit-led run that is not a valid numeric literal (`0x`, `1.2.3`)
    MalformedNumber,
    Str,
    Char,

    // =========================================================================
    // MULTI-CHARACTER OPERATORS
    // =========================================================================
    Ellipsis,   // ...
    ShlEq,      // <<=
    ShrEq,      // >>=
    Arrow,      // ->
    PlusPlus,   // ++
    MinusMinus, // --
    Shl,        // <<
    Shr,        // >>
    LtEq,       // <=
    GtEq,       // >=
    EqEq,       // ==
    BangEq,     // !=
    AmpAmp,     // &&
    PipePipe,   // ||
    PlusEq,     // +=
    MinusEq,    // -=
    StarEq,     // *=
    SlashEq,    // /=
    PercentEq,  // %=
    AmpEq,      // &=
    PipeEq,     // |=
    CaretEq,    // ^=

    // =========================================================================
    // SINGLE-CHARACTER OPERATORS & PUNCTUATION
    // =========================================================================
    LBrace,    // {
    RBrace,    // }
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    Semicolon, // ;
    Comma,     // ,
    Colon,     // :
    Question,  // ?
    Dot,       // .
    Plus,      // +
    Minus,     // -
    Star,      // *
    Slash,     // /
    Percent,   // %
    Amp,       // &
    Pipe,      // |
    Caret,     // ^
    Tilde,     // ~
    Bang,      // !
    Lt,        // <
    Gt,        // >
    Eq,        // =

    // =========================================================================
    // FALLBACK
    // =========================================================================
    /// Input no rule matches; one token per character
    Unknown,
}

impl TokenKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::LineComment | Self::BlockComment)
    }

    /// Check if this is a comment
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment)
    }

    /// Check if this is a literal (numeric, string, or character)
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::MalformedNumber | Self::Str | Self::Char
        )
    }

    /// Check if this opens a delimiter region
    pub fn is_opener(self) -> bool {
        matches!(self, Self::LBrace | Self::LParen | Self::LBracket)
    }

    /// Check if this closes a delimiter region
    pub fn is_closer(self) -> bool {
        matches!(self, Self::RBrace | Self::RParen | Self::RBracket)
    }
}

/// A token with its kind, borrowed text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: TextRange,
}
