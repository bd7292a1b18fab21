//! Syntax categories assigned to source spans

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The classification attached to every annotated span
///
/// Categories are deliberately editor-shaped rather than grammar-shaped:
/// they answer "how should this span be painted", not "what grammar
/// production is this".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Category {
    /// Reserved word (`if`, `return`, `typedef`, ...)
    Keyword,
    /// Name known to denote a type, via `typedef` tracking or a tag
    TypeName,
    /// Any other name
    Identifier,
    /// Integer or floating literal, malformed numbers included
    NumericLiteral,
    StringLiteral,
    CharLiteral,
    /// Value-producing symbol (`+`, `<<`, member access, ternary `?`/`:`)
    Operator,
    /// Structural symbol (delimiters, `;`, `,`, pointer-declaration `*`)
    Punctuation,
    /// Whole preprocessor line, continuations included
    PreprocessorDirective,
    Comment,
    /// `goto` target or a statement label being declared
    Label,
    Whitespace,
    /// Input no rule recognizes
    Unknown,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::TypeName => "type-name",
            Category::Identifier => "identifier",
            Category::NumericLiteral => "numeric-literal",
            Category::StringLiteral => "string-literal",
            Category::CharLiteral => "char-literal",
            Category::Operator => "operator",
            Category::Punctuation => "punctuation",
            Category::PreprocessorDirective => "preprocessor-directive",
            Category::Comment => "comment",
            Category::Label => "label",
            Category::Whitespace => "whitespace",
            Category::Unknown => "unknown",
        }
    }

    /// Spans a renderer may skip entirely
    pub fn is_trivia(self) -> bool {
        matches!(self, Category::Whitespace | Category::Comment)
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Category::NumericLiteral | Category::StringLiteral | Category::CharLiteral
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
