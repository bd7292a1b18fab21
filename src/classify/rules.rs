//! Context rules for ambiguous symbols
//!
//! A handful of C symbols cannot be classified from their own text: `*`
//! is a pointer declarator or multiplication, `:` is a ternary arm or a
//! label/bitfield marker, `++`/`--` bind before or after their operand.
//! Each gets a small rule table keyed on summarized left context, with an
//! explicit fallback row. Tables keep the policy inspectable and make the
//! fallback a visible decision instead of a buried `_ =>` arm.

use super::category::Category;

/// Summary of the nearest significant token to the left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrevKind {
    /// Start of input
    Nothing,
    /// A type keyword such as `int` or `unsigned`
    TypeKeyword,
    /// A name known to denote a type
    TypeName,
    /// A `*` already classified as a pointer declarator
    PointerStar,
    /// Something that produces a value: identifier, literal, `)`, `]`
    Value,
    Other,
}

/// `*` after a type (or another declarator star) declares a pointer
pub const STAR_RULES: &[(PrevKind, Category)] = &[
    (PrevKind::TypeKeyword, Category::Punctuation),
    (PrevKind::TypeName, Category::Punctuation),
    (PrevKind::PointerStar, Category::Punctuation),
];

/// Everything else is multiplication or dereference
pub const STAR_FALLBACK: Category = Category::Operator;

pub fn resolve_star(prev: PrevKind) -> Category {
    STAR_RULES
        .iter()
        .find(|(kind, _)| *kind == prev)
        .map(|(_, category)| *category)
        .unwrap_or(STAR_FALLBACK)
}

/// Which side `++`/`--` binds on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixity {
    Prefix,
    Postfix,
}

/// `x++`, `arr[i]++`, `f()++`: postfix after anything value-shaped
pub const INCREMENT_RULES: &[(PrevKind, Fixity)] = &[(PrevKind::Value, Fixity::Postfix)];

pub const INCREMENT_FALLBACK: Fixity = Fixity::Prefix;

pub fn resolve_increment(prev: PrevKind) -> Fixity {
    INCREMENT_RULES
        .iter()
        .find(|(kind, _)| *kind == prev)
        .map(|(_, fixity)| *fixity)
        .unwrap_or(INCREMENT_FALLBACK)
}

/// `:` closes a pending `?` as an operator; otherwise it ends a label,
/// `case` arm, or bitfield declarator and reads as punctuation.
pub fn resolve_colon(ternary_pending: bool) -> Category {
    if ternary_pending {
        Category::Operator
    } else {
        Category::Punctuation
    }
}
