//! Foundation types shared by every layer.
//!
//! - [`TextRange`], [`TextSize`] - source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - line/column conversion
//!
//! This module has NO dependencies on other ctint modules.

mod line_index;

pub use line_index::{LineCol, LineIndex};
pub use text_size::{TextRange, TextSize};

// Re-export the crate for downstream use
pub use text_size;
