//! Syntax classification: token stream to categorized spans
//!
//! Layered bottom-up: keyword and type-name tables, the region tracker,
//! the disambiguation rule tables, the per-token classifier, and the
//! engine that drives one pass over a whole buffer.

pub mod category;
pub mod classifier;
pub mod engine;
pub mod keywords;
pub mod regions;
pub mod rules;
pub mod typenames;

pub use category::Category;
pub use classifier::Classifier;
pub use engine::{classify, classify_with, Classified, Options};
pub use regions::{Region, RegionKind, RegionTracker};
pub use typenames::{TypeNameTable, STDLIB_TYPEDEFS};
