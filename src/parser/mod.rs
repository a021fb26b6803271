//! Logos-based parser for trigger expressions
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with TokenKind (conditions are opaque LEAF tokens)
//!     ↓
//! Parser (recursive descent) → Node tree
//!     ↓
//! Labeler → LabelMap
//! ```
//!
//! Parsing is all-or-nothing: the first error aborts and no partial tree is
//! returned.

#[allow(clippy::module_inception)]
mod parser;

pub mod errors;
mod lexer;
mod options;
mod token_kind;

pub use errors::{ErrorCode, ParseError};
pub use lexer::{Lexer, Token, tokenize, tokenize_with};
pub use options::ParseOptions;
pub use parser::{parse, parse_expression, parse_expression_with, validate_condition};
pub use token_kind::{TokenKind, kind_to_name};
