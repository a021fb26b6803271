use thiserror::Error;

use crate::base::Label;
use crate::parser::ErrorCode;

/// Errors produced while applying an [`EditCommand`](super::EditCommand)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The label is not in the label map, or the map no longer matches the tree.
    #[error("unknown label '{0}'")]
    UnknownLabel(Label),

    #[error("cannot add a first condition to a non-empty expression")]
    AddOnNonEmpty,

    /// `and` / `or` without a label on a tree that is not a single condition.
    #[error("a target label is required")]
    MissingTarget,

    #[error("condition text is empty")]
    EmptyLeaf,

    #[error("unknown edit action '{0}'")]
    UnknownAction(String),

    /// The new condition would sit deeper than [`MAX_DEPTH`](crate::syntax::MAX_DEPTH).
    #[error("expression nests too deeply")]
    TooDeep,
}

impl EditError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownLabel(_) => ErrorCode::E0601,
            Self::AddOnNonEmpty => ErrorCode::E0602,
            Self::MissingTarget => ErrorCode::E0603,
            Self::EmptyLeaf => ErrorCode::E0604,
            Self::UnknownAction(_) => ErrorCode::E0605,
            Self::TooDeep => ErrorCode::E0606,
        }
    }

    /// Format the error for display, prefixed with its code
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}
