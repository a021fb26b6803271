//! Error code definitions for expression diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid characters, unterminated leaves)
//! - E02xx: Structural errors (parentheses)
//! - E04xx: Expression errors (missing operands)
//! - E06xx: Edit errors (labels, commands)
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parse and edit diagnostics
///
/// Each error code represents a specific category of error,
/// enabling filtering, documentation, and form-layer integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Invalid or unexpected character outside a leaf
    E0101,
    /// Leaf `{...}` or its quoted threshold never closed
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unbalanced parenthesis
    E0203,
    /// Groups or connective chains nest past the depth limit
    E0204,

    // =========================================================================
    // E04xx: Expression errors
    // =========================================================================
    /// Missing operand in expression
    E0402,

    // =========================================================================
    // E06xx: Edit errors
    // =========================================================================
    /// Label not present in the current label map
    E0601,
    /// `add` used on an expression that already has conditions
    E0602,
    /// No target label given where one is required
    E0603,
    /// New condition text is empty
    E0604,
    /// Unrecognized edit action
    E0605,
    /// Edit would nest the tree past the depth limit
    E0606,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0203")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0402 => "E0402",
            Self::E0601 => "E0601",
            Self::E0602 => "E0602",
            Self::E0603 => "E0603",
            Self::E0604 => "E0604",
            Self::E0605 => "E0605",
            Self::E0606 => "E0606",
            Self::E0901 => "E0901",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0203 | Self::E0204 => "structural error",
            Self::E0402 => "expression error",
            Self::E0601
            | Self::E0602
            | Self::E0603
            | Self::E0604
            | Self::E0605
            | Self::E0606 => "edit error",
            Self::E0901 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated condition",
            Self::E0203 => "unbalanced parentheses",
            Self::E0204 => "expression nests too deeply",
            Self::E0402 => "missing operand",
            Self::E0601 => "unknown label",
            Self::E0602 => "expression is not empty",
            Self::E0603 => "missing target label",
            Self::E0604 => "empty condition",
            Self::E0605 => "unknown action",
            Self::E0606 => "expression nests too deeply",
            Self::E0901 => "unexpected token",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
