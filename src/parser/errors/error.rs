//! Parse error type
//!
//! Every variant carries the byte offset the form layer should highlight.

use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::{TextRange, TextSize};

/// Errors produced while tokenizing or parsing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `{...}` condition (or its quoted threshold) is never closed.
    #[error("unterminated condition starting at offset {0:?}")]
    UnterminatedLeaf(TextSize),

    /// A character that cannot start a condition, connective or parenthesis.
    #[error("unexpected character {1:?} at offset {0:?}")]
    UnexpectedChar(TextSize, char),

    /// An unmatched `(` or a stray `)`.
    #[error("unbalanced parentheses at offset {0:?}")]
    UnbalancedParens(TextSize),

    /// A connective or `(` without the operand that must follow it.
    #[error("missing operand at offset {0:?}")]
    EmptyAtom(TextSize),

    /// A token where a connective or the end of input was expected.
    #[error("unexpected token at offset {0:?}, expected 'and', 'or' or ')'")]
    UnexpectedToken(TextSize),

    /// A group or connective chain nests deeper than
    /// [`MAX_DEPTH`](crate::syntax::MAX_DEPTH); reported at the `(` or
    /// connective that crosses the limit.
    #[error("expression nests too deeply at offset {0:?}")]
    TooDeep(TextSize),
}

impl ParseError {
    /// Byte offset of the error in the source text
    pub fn offset(&self) -> TextSize {
        match self {
            Self::UnterminatedLeaf(offset)
            | Self::UnexpectedChar(offset, _)
            | Self::UnbalancedParens(offset)
            | Self::EmptyAtom(offset)
            | Self::UnexpectedToken(offset)
            | Self::TooDeep(offset) => *offset,
        }
    }

    /// Source range to highlight
    ///
    /// Covers the offending character where there is one, otherwise an
    /// empty range at the offset.
    pub fn range(&self) -> TextRange {
        match self {
            Self::UnexpectedChar(offset, ch) => TextRange::at(*offset, TextSize::of(*ch)),
            Self::UnterminatedLeaf(offset) | Self::UnbalancedParens(offset) => {
                TextRange::at(*offset, TextSize::from(1))
            }
            Self::EmptyAtom(offset) | Self::UnexpectedToken(offset) | Self::TooDeep(offset) => {
                TextRange::empty(*offset)
            }
        }
    }

    /// Categorized error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnexpectedChar(..) => ErrorCode::E0101,
            Self::UnterminatedLeaf(_) => ErrorCode::E0102,
            Self::UnbalancedParens(_) => ErrorCode::E0203,
            Self::EmptyAtom(_) => ErrorCode::E0402,
            Self::UnexpectedToken(_) => ErrorCode::E0901,
            Self::TooDeep(_) => ErrorCode::E0204,
        }
    }

    /// Format the error for display, prefixed with its code
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}
