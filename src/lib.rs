//! # trigger-expr
//!
//! Parser, labeler and structural editor for monitoring trigger expressions
//! such as `{host:item.last(0)}>10 and {host:item.min(5m)}<2`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Outline, condition list, tree view, Analysis snapshots
//!   ↓
//! edit      → EditCommand and path-based tree rewriting
//!   ↓
//! semantic  → Leaf labels (A, B, ... AA) and their paths
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, ParseError
//!   ↓
//! syntax    → Node tree and formatter
//!   ↓
//! base      → Primitives (Label, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → semantic → edit → ide)
// ============================================================================

/// Foundation types: Label numbering, TextRange
pub mod base;

/// Syntax: expression tree and canonical formatting
pub mod syntax;

/// Parser: Logos lexer, recursive-descent parser, error codes
pub mod parser;

/// Leaf labeling
pub mod semantic;

/// Structural edits addressed by label
pub mod edit;

/// Display helpers and Analysis snapshots
pub mod ide;

// Re-export foundation types
pub use base::{Label, TextRange, TextSize};

// Re-export the main entry points
pub use edit::{EditCommand, EditError, apply_edit};
pub use ide::{Analysis, AnalysisConfig, AnalysisError, remake_expression};
pub use parser::{ErrorCode, ParseError, ParseOptions, parse_expression, tokenize};
pub use semantic::{LabelMap, label};
pub use syntax::{Node, Op, serialize};
