//! Path-based tree rewriting
//!
//! Every edit rebuilds the spine from the root down to the edited position
//! and shares all other subtrees with the input tree.

use std::rc::Rc;

use smol_str::SmolStr;
use tracing::debug;

use super::command::EditCommand;
use super::error::EditError;
use crate::semantic::LabelMap;
use crate::syntax::{Direction, MAX_DEPTH, Node, Op, leaf_count};

/// Apply `command` to `tree`, producing a new tree.
///
/// `labels` must be the label map of `tree`; a stale map is detected and
/// reported as [`EditError::UnknownLabel`]. The input tree is never modified.
pub fn apply_edit(
    tree: Option<&Node>,
    labels: &LabelMap,
    command: &EditCommand,
) -> Result<Option<Node>, EditError> {
    debug!(
        kind = command.kind(),
        target = ?command.target(),
        leaves = leaf_count(tree),
        depth = tree.map_or(0, Node::depth),
        "applying edit"
    );

    match command {
        EditCommand::Add { text } => {
            let text = condition_text(text)?;
            match tree {
                None => Ok(Some(Node::leaf(text))),
                Some(_) => Err(EditError::AddOnNonEmpty),
            }
        }
        EditCommand::And { target, text } => {
            join(tree, labels, Op::And, target.as_deref(), text).map(Some)
        }
        EditCommand::Or { target, text } => {
            join(tree, labels, Op::Or, target.as_deref(), text).map(Some)
        }
        EditCommand::Replace { target, text } => {
            let text = condition_text(text)?;
            let (root, path) = locate(tree, labels, target)?;
            Ok(Some(rebuild(root, path, |_| Node::leaf(text))))
        }
        EditCommand::Remove { target } => {
            let (root, path) = locate(tree, labels, target)?;
            Ok(remove_at(root, path))
        }
    }
}

/// Trimmed condition text; blank text is rejected
fn condition_text(text: &str) -> Result<SmolStr, EditError> {
    match text.trim() {
        "" => Err(EditError::EmptyLeaf),
        trimmed => Ok(SmolStr::new(trimmed)),
    }
}

fn join(
    tree: Option<&Node>,
    labels: &LabelMap,
    op: Op,
    target: Option<&str>,
    text: &str,
) -> Result<Node, EditError> {
    let text = condition_text(text)?;
    let (root, path) = match (target, tree) {
        (Some(label), _) => locate(tree, labels, label)?,
        // Without a label only a lone condition is an unambiguous target
        (None, Some(root @ Node::Leaf(_))) => (root, &[][..]),
        (None, _) => return Err(EditError::MissingTarget),
    };
    // The new leaf sits one level below the target
    if path.len() >= MAX_DEPTH {
        return Err(EditError::TooDeep);
    }

    Ok(rebuild(root, path, |old| {
        Node::binary(op, old.clone(), Node::leaf(text))
    }))
}

/// Resolve `label` to the root and the path of its leaf.
fn locate<'t, 'l>(
    tree: Option<&'t Node>,
    labels: &'l LabelMap,
    label: &str,
) -> Result<(&'t Node, &'l [Direction]), EditError> {
    let unknown = || EditError::UnknownLabel(label.into());

    let root = tree.ok_or_else(unknown)?;
    let entry = labels.get(label).ok_or_else(unknown)?;
    match root.subtree_at(&entry.path) {
        Some(Node::Leaf(text)) if *text == entry.text => Ok((root, entry.path.as_slice())),
        _ => Err(unknown()),
    }
}

/// Copy of `root` with the subtree at `path` replaced by `f(subtree)`.
///
/// `path` must lead to an existing node.
fn rebuild(root: &Node, path: &[Direction], f: impl FnOnce(&Node) -> Node) -> Node {
    // (connective, parens flag, step taken, untouched sibling) per spine node
    let mut spine = Vec::with_capacity(path.len());
    let mut node = root;
    for &step in path {
        let Node::Binary {
            op,
            left,
            right,
            explicit_parens,
        } = node
        else {
            break;
        };
        let (next, sibling) = match step {
            Direction::Left => (left, right),
            Direction::Right => (right, left),
        };
        spine.push((*op, *explicit_parens, step, sibling));
        node = &**next;
    }

    let mut rebuilt = f(node);
    while let Some((op, explicit_parens, step, sibling)) = spine.pop() {
        let child = Rc::new(rebuilt);
        let (left, right) = match step {
            Direction::Left => (child, Rc::clone(sibling)),
            Direction::Right => (Rc::clone(sibling), child),
        };
        rebuilt = Node::Binary {
            op,
            left,
            right,
            explicit_parens,
        };
    }
    rebuilt
}

/// Drop the leaf at `path`; its parent collapses into the sibling.
fn remove_at(root: &Node, path: &[Direction]) -> Option<Node> {
    let (&last, parent_path) = path.split_last()?;
    Some(rebuild(root, parent_path, |parent| {
        parent
            .child(last.opposite())
            .cloned()
            .unwrap_or_else(|| parent.clone())
    }))
}
