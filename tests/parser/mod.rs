//! Parser tests
//!
//! Tests for:
//! - Tokenizing conditions, connectives and parentheses
//! - Precedence and grouping
//! - Error kinds and offsets

pub mod tests_lexer;
pub mod tests_parse_errors;
