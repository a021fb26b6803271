//! Foundation types for the trigger expression toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`Label`] - Display label assigned to a leaf (`A`, `B`, ..., `AA`)
//!
//! This module has NO dependencies on other crate modules.

mod label;

pub use label::{Label, label_for_index};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
