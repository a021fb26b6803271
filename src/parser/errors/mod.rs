//! Parser error handling module
//!
//! This module provides structured error handling for the expression parser:
//! - Categorized error codes for filtering and documentation
//! - Offsets and highlight ranges for inline validation messages

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::ParseError;
