//! Lexical analysis: raw text to a contiguous token stream
//!
//! The scanner is total. It never fails and never skips input: every byte
//! of the source ends up inside exactly one token, and anything the
//! language does not recognize surfaces as an `Unknown` token or as a
//! recovered construct plus a recorded [`LexError`](crate::errors::LexError).

pub mod directive;

mod lexer;
mod token;

pub use directive::{eval_condition, parse_directive, Directive, DirectiveKind};
pub use lexer::{scan, tokenize, Scanner};
pub use token::{Token, TokenKind};
