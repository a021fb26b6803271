//! # Node labeling
//!
//! Gives every leaf of an expression tree a short display label (`A`, `B`,
//! ..., `Z`, `AA`, ...) and remembers where in the tree it lives. Labels are
//! never stored on the tree itself; they are recomputed after every edit.

mod label_map;
mod labeler;

pub use label_map::{LabelEntry, LabelMap};
pub use labeler::label;
