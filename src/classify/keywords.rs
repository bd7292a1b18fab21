//! Reserved word tables
//!
//! Sorted arrays probed by binary search. `bool`, `true`, `false`, and
//! `NULL` are not all reserved words in every C dialect, but editors
//! conventionally paint them as keywords, so they live here too.

/// Every name classified as [`Category::Keyword`](super::Category::Keyword),
/// sorted by ASCII value
pub const KEYWORDS: &[&str] = &[
    "NULL",
    "_Alignas",
    "_Alignof",
    "_Atomic",
    "_Bool",
    "_Complex",
    "_Generic",
    "_Imaginary",
    "_Noreturn",
    "_Static_assert",
    "_Thread_local",
    "auto",
    "bool",
    "break",
    "case",
    "char",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extern",
    "false",
    "float",
    "for",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "struct",
    "switch",
    "true",
    "typedef",
    "union",
    "unsigned",
    "void",
    "volatile",
    "while",
];

/// Keywords that name or qualify a type, sorted by ASCII value
///
/// Used by the pointer-star rule: `int *` declares, `x *` multiplies.
pub const TYPE_KEYWORDS: &[&str] = &[
    "_Atomic",
    "_Bool",
    "_Complex",
    "_Imaginary",
    "bool",
    "char",
    "const",
    "double",
    "float",
    "int",
    "long",
    "restrict",
    "short",
    "signed",
    "unsigned",
    "void",
    "volatile",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.binary_search(&name).is_ok()
}

pub fn is_type_keyword(name: &str) -> bool {
    TYPE_KEYWORDS.binary_search(&name).is_ok()
}

/// `struct`, `enum`, and `union` introduce a tag name
pub fn is_tag_keyword(name: &str) -> bool {
    matches!(name, "struct" | "enum" | "union")
}
