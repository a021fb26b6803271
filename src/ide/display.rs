//! Label outline, condition list and indented tree view.

use std::fmt;

use smol_str::SmolStr;

use crate::base::{Label, label_for_index};
use crate::semantic::LabelMap;
use crate::syntax::{FormatOptions, Node, Op, formatter::format_tree};

/// One line of the condition list under the outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRow {
    /// Leaf label (`A`, `B`, ...)
    pub label: Label,
    /// Condition text, verbatim
    pub text: SmolStr,
}

/// Connector glyph drawn for one ancestor level of a [`TreeRow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Connector {
    /// `├` this row, more siblings follow
    Branch,
    /// `└` this row is the last sibling
    Last,
    /// `│` an ancestor still has siblings below
    Pipe,
    /// nothing left to draw at this level
    Blank,
}

impl Connector {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Branch => "├─ ",
            Self::Last => "└─ ",
            Self::Pipe => "│  ",
            Self::Blank => "   ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum TreeRowKind {
    /// A (possibly n-ary) chain of one connective
    Operator { op: Op },
    Leaf { label: Label, text: SmolStr },
}

/// One line of the indented tree view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeRow {
    /// Nesting level; the root is at depth 0
    pub depth: usize,
    /// One connector per level `1..=depth`
    pub connectors: Vec<Connector>,
    pub kind: TreeRowKind,
}

impl TreeRow {
    /// Connectors rendered as box-drawing text
    pub fn prefix(&self) -> String {
        self.connectors.iter().map(|c| c.glyph()).collect()
    }

    pub fn label(&self) -> Option<&Label> {
        match &self.kind {
            TreeRowKind::Leaf { label, .. } => Some(label),
            TreeRowKind::Operator { .. } => None,
        }
    }
}

impl fmt::Display for TreeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix())?;
        match &self.kind {
            TreeRowKind::Operator { op: Op::And } => f.write_str("And"),
            TreeRowKind::Operator { op: Op::Or } => f.write_str("Or"),
            TreeRowKind::Leaf { label, text } => write!(f, "{label} {text}"),
        }
    }
}

/// Expression with every leaf replaced by its label, e.g. `A or (B and C)`
pub fn outline(tree: Option<&Node>, labels: &LabelMap) -> String {
    outline_with(tree, labels, &FormatOptions::default())
}

pub fn outline_with(tree: Option<&Node>, labels: &LabelMap, options: &FormatOptions) -> String {
    format_tree(tree, options, |index, _, out| {
        out.push_str(&label_for(labels, index));
    })
}

/// One row per leaf, in label order
pub fn display_rows(tree: Option<&Node>, labels: &LabelMap) -> Vec<DisplayRow> {
    let Some(root) = tree else {
        return Vec::new();
    };
    root.leaves()
        .into_iter()
        .enumerate()
        .map(|(index, text)| DisplayRow {
            label: label_for(labels, index),
            text: SmolStr::new(text),
        })
        .collect()
}

/// Rows of the indented tree view, in pre-order.
///
/// Chains of one connective are shown as a single operator with all of
/// their operands, unless the user grouped part of the chain with
/// parentheses.
pub fn tree_rows(tree: Option<&Node>, labels: &LabelMap) -> Vec<TreeRow> {
    let mut builder = RowBuilder {
        labels,
        next_leaf: 0,
        more_siblings: Vec::new(),
        rows: Vec::new(),
    };
    if let Some(root) = tree {
        builder.build(root);
    }
    builder.rows
}

/// Label of the `index`-th leaf; numbering is the same as the labeler's.
fn label_for(labels: &LabelMap, index: usize) -> Label {
    labels
        .label_at(index)
        .cloned()
        .unwrap_or_else(|| label_for_index(index))
}

struct RowBuilder<'a> {
    labels: &'a LabelMap,
    next_leaf: usize,
    /// For each level below the root: does the node on the current path
    /// have siblings after it
    more_siblings: Vec<bool>,
    rows: Vec<TreeRow>,
}

impl RowBuilder<'_> {
    fn build(&mut self, root: &Node) {
        // (node, depth, more siblings after it)
        let mut pending = vec![(root, 0usize, false)];
        while let Some((node, depth, more)) = pending.pop() {
            self.more_siblings.truncate(depth.saturating_sub(1));
            if depth > 0 {
                self.more_siblings.push(more);
            }
            self.row(node);

            let operands = operands(node);
            let last = operands.len().saturating_sub(1);
            for (i, operand) in operands.into_iter().enumerate().rev() {
                pending.push((operand, depth + 1, i != last));
            }
        }
    }

    fn row(&mut self, node: &Node) {
        let kind = match node {
            Node::Leaf(text) => {
                let label = label_for(self.labels, self.next_leaf);
                self.next_leaf += 1;
                TreeRowKind::Leaf {
                    label,
                    text: text.clone(),
                }
            }
            Node::Binary { op, .. } => TreeRowKind::Operator { op: *op },
        };
        self.rows.push(TreeRow {
            depth: self.more_siblings.len(),
            connectors: self.connectors(),
            kind,
        });
    }

    fn connectors(&self) -> Vec<Connector> {
        let depth = self.more_siblings.len();
        self.more_siblings
            .iter()
            .enumerate()
            .map(|(i, &more)| match (i + 1 == depth, more) {
                (true, true) => Connector::Branch,
                (true, false) => Connector::Last,
                (false, true) => Connector::Pipe,
                (false, false) => Connector::Blank,
            })
            .collect()
    }
}

/// Operands shown under an operator row
fn operands(node: &Node) -> Vec<&Node> {
    let Node::Binary {
        op, left, right, ..
    } = node
    else {
        return Vec::new();
    };

    let mut out = Vec::new();
    let mut pending: Vec<&Node> = vec![&**right, &**left];
    while let Some(next) = pending.pop() {
        match next {
            Node::Binary {
                op: inner,
                left,
                right,
                explicit_parens: false,
            } if inner == op => {
                pending.push(&**right);
                pending.push(&**left);
            }
            _ => out.push(next),
        }
    }
    out
}
