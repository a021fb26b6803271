//! Analysis: one parsed and labelled expression, ready for display.
//!
//! An `Analysis` is an immutable snapshot. Editing it returns a new snapshot
//! with a fresh label map, so labels shown to the user always match the tree
//! the next command will be applied to.
//!
//! ## Usage
//!
//! ```
//! use trigger_expr::{Analysis, AnalysisConfig, EditCommand};
//!
//! let config = AnalysisConfig::default();
//! let analysis = Analysis::analyze("{A:a.last(0)}>5 and {B:b.last(0)}<1", &config)?;
//! assert_eq!(analysis.outline(), "A and B");
//!
//! let edited = analysis.apply(&EditCommand::remove("B"))?;
//! assert_eq!(edited.expression(), "{A:a.last(0)}>5");
//! # Ok::<(), trigger_expr::AnalysisError>(())
//! ```

use thiserror::Error;
use tracing::debug;

use super::display::{DisplayRow, TreeRow, display_rows, outline_with, tree_rows};
use crate::edit::{EditCommand, EditError, apply_edit};
use crate::parser::{
    ErrorCode, ParseError, ParseOptions, parse_expression_with, validate_condition,
};
use crate::semantic::{LabelMap, label};
use crate::syntax::{ConnectiveStyle, FormatOptions, Node, leaf_count, serialize_with};

/// Parse and format settings shared by every operation on an [`Analysis`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisConfig {
    pub parse: ParseOptions,
    pub format: FormatOptions,
}

impl AnalysisConfig {
    /// Read and write the legacy `&` / `|` connectives
    pub fn legacy() -> Self {
        Self {
            parse: ParseOptions::legacy(),
            format: FormatOptions {
                connective_style: ConnectiveStyle::Symbolic,
            },
        }
    }
}

/// Errors from [`Analysis::apply`] and [`remake_expression`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Edit(#[from] EditError),

    /// The text of a new condition is not exactly one condition.
    #[error("invalid condition: {0}")]
    InvalidLeaf(ParseError),
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Parse(err) | Self::InvalidLeaf(err) => err.code(),
            Self::Edit(err) => err.code(),
        }
    }
}

/// A parsed expression together with its labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    tree: Option<Node>,
    labels: LabelMap,
    config: AnalysisConfig,
}

impl Analysis {
    /// Parse and label `text`. Empty text gives an empty analysis.
    pub fn analyze(text: &str, config: &AnalysisConfig) -> Result<Self, ParseError> {
        debug!(len = text.len(), "analyzing expression");
        let tree = parse_expression_with(text, &config.parse)?;
        Ok(Self::from_tree(tree, *config))
    }

    /// Label an already built tree.
    pub fn from_tree(tree: Option<Node>, config: AnalysisConfig) -> Self {
        let labels = label(tree.as_ref());
        Self {
            tree,
            labels,
            config,
        }
    }

    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    pub fn leaf_count(&self) -> usize {
        leaf_count(self.tree())
    }

    /// Canonical expression text
    pub fn expression(&self) -> String {
        serialize_with(self.tree(), &self.config.format)
    }

    /// The expression with leaves replaced by labels
    pub fn outline(&self) -> String {
        outline_with(self.tree(), &self.labels, &self.config.format)
    }

    pub fn display_rows(&self) -> Vec<DisplayRow> {
        display_rows(self.tree(), &self.labels)
    }

    pub fn tree_rows(&self) -> Vec<TreeRow> {
        tree_rows(self.tree(), &self.labels)
    }

    /// Apply one edit and relabel. `self` is left as it was.
    ///
    /// New condition text is checked to be a single condition before the
    /// tree is touched.
    pub fn apply(&self, command: &EditCommand) -> Result<Self, AnalysisError> {
        debug!(
            kind = command.kind(),
            leaves = self.leaf_count(),
            "applying command"
        );

        if let Some(text) = command.new_text().filter(|t| !t.trim().is_empty()) {
            validate_condition(text, &self.config.parse).map_err(AnalysisError::InvalidLeaf)?;
        }

        let tree = apply_edit(self.tree(), &self.labels, command)?;
        Ok(Self::from_tree(tree, self.config))
    }
}

/// Parse `text`, apply `command` and return the new canonical expression.
pub fn remake_expression(
    text: &str,
    command: &EditCommand,
    config: &AnalysisConfig,
) -> Result<String, AnalysisError> {
    let analysis = Analysis::analyze(text, config)?;
    Ok(analysis.apply(command)?.expression())
}
