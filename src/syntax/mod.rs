// Expression tree and its textual rendering
pub mod formatter;
mod node;

pub use formatter::{ConnectiveStyle, FormatOptions, serialize, serialize_with};
pub use node::{Direction, MAX_DEPTH, Node, NodePath, Op, leaf_count};
