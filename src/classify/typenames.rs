//! Registry of names known to denote types
//!
//! Populated from `typedef` declarations as the classifier walks the
//! token stream, and optionally pre-seeded with common standard-library
//! typedef names. Lookups happen on every identifier, so the set is keyed
//! by interned strings in a hash set tuned for short keys.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::trace;

/// Names that classify as [`Category::TypeName`](super::Category::TypeName)
#[derive(Debug, Default, Clone)]
pub struct TypeNameTable {
    names: FxHashSet<SmolStr>,
}

impl TypeNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<SmolStr>) {
        let name = name.into();
        trace!(name = %name, "registered type name");
        self.names.insert(name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Extend<SmolStr> for TypeNameTable {
    fn extend<I: IntoIterator<Item = SmolStr>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

/// Standard-library typedef names worth recognizing without their headers
pub const STDLIB_TYPEDEFS: &[&str] = &[
    "FILE",
    "int16_t",
    "int32_t",
    "int64_t",
    "int8_t",
    "intptr_t",
    "ptrdiff_t",
    "size_t",
    "ssize_t",
    "time_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
    "uint8_t",
    "uintptr_t",
    "va_list",
    "wchar_t",
];
