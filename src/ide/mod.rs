//! Display and session-level operations over expression trees.
//!
//! Everything here is a pure function of a tree and its label map:
//!
//! - [`outline`]: the expression with leaves replaced by labels
//! - [`display_rows`]: the labelled condition list
//! - [`tree_rows`]: the indented tree view
//! - [`Analysis`]: a parsed, labelled snapshot that can be edited
//!
//! ## Usage
//!
//! ```
//! use trigger_expr::ide::{AnalysisConfig, remake_expression};
//! use trigger_expr::EditCommand;
//!
//! let text = remake_expression(
//!     "{A:a.last(0)}=1",
//!     &EditCommand::and(Some("A"), "{B:b.last(0)}=0"),
//!     &AnalysisConfig::default(),
//! )?;
//! assert_eq!(text, "{A:a.last(0)}=1 and {B:b.last(0)}=0");
//! # Ok::<(), trigger_expr::AnalysisError>(())
//! ```

mod analysis;
mod display;

pub use analysis::{Analysis, AnalysisConfig, AnalysisError, remake_expression};
pub use display::{
    Connector, DisplayRow, TreeRow, TreeRowKind, display_rows, outline, outline_with, tree_rows,
};
