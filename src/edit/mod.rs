//! Structural editing of expression trees
//!
//! Commands address leaves by the labels the labeler handed out. Edits
//! return a fresh tree; callers relabel it before issuing the next command.

mod apply;
mod command;
mod error;

pub use apply::apply_edit;
pub use command::EditCommand;
pub use error::EditError;
