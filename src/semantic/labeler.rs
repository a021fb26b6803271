use tracing::trace;

use super::label_map::{LabelEntry, LabelMap};
use crate::base::label_for_index;
use crate::syntax::{Direction, Node, NodePath};

/// Assign a label to every leaf of `tree`.
///
/// Labels follow depth-first left-to-right leaf order. The result depends
/// only on the tree shape and leaf texts, so labeling the same tree twice
/// yields identical maps.
pub fn label(tree: Option<&Node>) -> LabelMap {
    let mut labels = LabelMap::new();
    let Some(root) = tree else {
        return labels;
    };

    let mut path = NodePath::new();
    // (node, parent path length, step from the parent)
    let mut pending: Vec<(&Node, usize, Option<Direction>)> = vec![(root, 0, None)];
    while let Some((node, parent_depth, step)) = pending.pop() {
        path.truncate(parent_depth);
        path.extend(step);

        match node {
            Node::Leaf(text) => {
                let label = label_for_index(labels.len());
                trace!(%label, depth = path.len(), "labelled leaf");
                labels.insert(
                    label,
                    LabelEntry {
                        text: text.clone(),
                        path: path.clone(),
                    },
                );
            }
            Node::Binary { left, right, .. } => {
                pending.push((&**right, path.len(), Some(Direction::Right)));
                pending.push((&**left, path.len(), Some(Direction::Left)));
            }
        }
    }
    labels
}
