//! Edit commands

use smol_str::SmolStr;

use super::error::EditError;
use crate::base::Label;

/// One structural edit, addressed by leaf label
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "action", rename_all = "lowercase"))]
pub enum EditCommand {
    /// Start an empty expression with its first condition
    Add { text: SmolStr },
    /// Join `text` to the target with `and`
    And {
        target: Option<Label>,
        text: SmolStr,
    },
    /// Join `text` to the target with `or`
    Or {
        target: Option<Label>,
        text: SmolStr,
    },
    /// Swap the target condition for `text`
    Replace { target: Label, text: SmolStr },
    /// Drop the target condition
    Remove { target: Label },
}

impl EditCommand {
    pub fn add(text: impl Into<SmolStr>) -> Self {
        Self::Add { text: text.into() }
    }

    pub fn and(target: Option<&str>, text: impl Into<SmolStr>) -> Self {
        Self::And {
            target: target.map(Label::from),
            text: text.into(),
        }
    }

    pub fn or(target: Option<&str>, text: impl Into<SmolStr>) -> Self {
        Self::Or {
            target: target.map(Label::from),
            text: text.into(),
        }
    }

    pub fn replace(target: impl Into<Label>, text: impl Into<SmolStr>) -> Self {
        Self::Replace {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn remove(target: impl Into<Label>) -> Self {
        Self::Remove {
            target: target.into(),
        }
    }

    /// Build a command from a legacy form action code.
    ///
    /// `"add"`, `"and"` / `"&"`, `"or"` / `"|"`, `"r"` (replace) and `"R"`
    /// (remove). An empty label counts as no label.
    pub fn parse_action(action: &str, label: Option<&str>, text: &str) -> Result<Self, EditError> {
        let label = label.map(str::trim).filter(|l| !l.is_empty());
        let required = || label.map(Label::from).ok_or(EditError::MissingTarget);

        match action {
            "add" => Ok(Self::add(text)),
            "and" | "&" => Ok(Self::and(label, text)),
            "or" | "|" => Ok(Self::or(label, text)),
            "r" => Ok(Self::Replace {
                target: required()?,
                text: text.into(),
            }),
            "R" => Ok(Self::Remove {
                target: required()?,
            }),
            other => Err(EditError::UnknownAction(other.to_string())),
        }
    }

    /// Short action name, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::And { .. } => "and",
            Self::Or { .. } => "or",
            Self::Replace { .. } => "replace",
            Self::Remove { .. } => "remove",
        }
    }

    /// Label the command is addressed to
    pub fn target(&self) -> Option<&Label> {
        match self {
            Self::Add { .. } => None,
            Self::And { target, .. } | Self::Or { target, .. } => target.as_ref(),
            Self::Replace { target, .. } | Self::Remove { target } => Some(target),
        }
    }

    /// Condition text the command introduces
    pub fn new_text(&self) -> Option<&str> {
        match self {
            Self::Add { text }
            | Self::And { text, .. }
            | Self::Or { text, .. }
            | Self::Replace { text, .. } => Some(text.as_str()),
            Self::Remove { .. } => None,
        }
    }
}
