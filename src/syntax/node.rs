//! Expression tree
//!
//! Trees are immutable. Children sit behind `Rc` so an edit rebuilds only the
//! spine from the root to the edited node and shares everything else.
//!
//! A chain such as `a or b or c` is left-deep, so tree depth grows with the
//! number of leaves. Every walk over a tree, including equality and drop,
//! keeps its pending nodes on the heap rather than the call stack.

use std::fmt;
use std::mem;
use std::rc::Rc;

use smol_str::SmolStr;

/// Boolean connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Op {
    And,
    Or,
}

impl Op {
    /// Canonical keyword (`and` / `or`)
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// Legacy single-character form (`&` / `|`)
    pub fn symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One step from a Binary node to one of its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Root-relative location of a node
pub type NodePath = Vec<Direction>;

/// Deepest leaf path the parser and editor will produce.
///
/// Every label records its leaf's path, so label maps grow with the square of
/// the depth on degenerate chains.
pub const MAX_DEPTH: usize = 256;

/// A node of the expression tree
#[derive(Debug, Clone)]
pub enum Node {
    /// An opaque condition, kept verbatim
    Leaf(SmolStr),
    /// Two operands joined by a connective
    Binary {
        op: Op,
        left: Rc<Node>,
        right: Rc<Node>,
        /// The source wrapped this node in parentheses
        explicit_parens: bool,
    },
}

impl Node {
    pub fn leaf(text: impl Into<SmolStr>) -> Self {
        Self::Leaf(text.into())
    }

    /// Binary node without explicit parentheses
    pub fn binary(op: Op, left: Node, right: Node) -> Self {
        Self::Binary {
            op,
            left: Rc::new(left),
            right: Rc::new(right),
            explicit_parens: false,
        }
    }

    pub fn and(left: Node, right: Node) -> Self {
        Self::binary(Op::And, left, right)
    }

    pub fn or(left: Node, right: Node) -> Self {
        Self::binary(Op::Or, left, right)
    }

    /// Copy of this node with the parenthesis flag set.
    ///
    /// Leaves carry no grouping and are returned unchanged.
    pub fn parenthesized(mut self) -> Self {
        if let Self::Binary {
            explicit_parens, ..
        } = &mut self
        {
            *explicit_parens = true;
        }
        self
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Condition text of a leaf
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text.as_str()),
            Self::Binary { .. } => None,
        }
    }

    /// Connective of a Binary node
    pub fn op(&self) -> Option<Op> {
        match self {
            Self::Binary { op, .. } => Some(*op),
            Self::Leaf(_) => None,
        }
    }

    pub fn has_explicit_parens(&self) -> bool {
        matches!(
            self,
            Self::Binary {
                explicit_parens: true,
                ..
            }
        )
    }

    /// Child in the given direction
    pub fn child(&self, direction: Direction) -> Option<&Node> {
        match (self, direction) {
            (Self::Binary { left, .. }, Direction::Left) => Some(&**left),
            (Self::Binary { right, .. }, Direction::Right) => Some(&**right),
            (Self::Leaf(_), _) => None,
        }
    }

    /// Subtree at a root-relative path
    pub fn subtree_at(&self, path: &[Direction]) -> Option<&Node> {
        path.iter()
            .try_fold(self, |node, &direction| node.child(direction))
    }

    /// Every node in pre-order, left subtree before right
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        let mut pending = vec![self];
        std::iter::from_fn(move || {
            let node = pending.pop()?;
            if let Self::Binary { left, right, .. } = node {
                pending.push(&**right);
                pending.push(&**left);
            }
            Some(node)
        })
    }

    pub fn leaf_count(&self) -> usize {
        self.descendants().filter(|node| node.is_leaf()).count()
    }

    /// Leaf texts in left-to-right order
    pub fn leaves(&self) -> Vec<&str> {
        self.descendants().filter_map(Node::leaf_text).collect()
    }

    /// Length of the longest root-to-leaf path; a lone leaf has depth 0
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            match node {
                Self::Leaf(_) => deepest = deepest.max(depth),
                Self::Binary { left, right, .. } => {
                    pending.push((&**right, depth + 1));
                    pending.push((&**left, depth + 1));
                }
            }
        }
        deepest
    }

    /// Structural equality ignoring parenthesis flags.
    ///
    /// Two equivalent trees evaluate identically; they may differ only in how
    /// the user grouped them.
    pub fn equivalent(&self, other: &Node) -> bool {
        self.same_shape(other, false)
    }

    fn same_shape(&self, other: &Node, compare_parens: bool) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Self::Leaf(a), Self::Leaf(b)) if a == b => {}
                (
                    Self::Binary {
                        op: op_a,
                        left: left_a,
                        right: right_a,
                        explicit_parens: parens_a,
                    },
                    Self::Binary {
                        op: op_b,
                        left: left_b,
                        right: right_b,
                        explicit_parens: parens_b,
                    },
                ) if op_a == op_b && (!compare_parens || parens_a == parens_b) => {
                    for (a, b) in [(left_a, left_b), (right_a, right_b)] {
                        if !Rc::ptr_eq(a, b) {
                            pending.push((&**a, &**b));
                        }
                    }
                }
                _ => return false,
            }
        }
        true
    }

    /// Move uniquely owned Binary children onto `pending`, leaving empty
    /// leaves in their place.
    fn detach_children(&mut self, pending: &mut Vec<Rc<Node>>) {
        if let Self::Binary { left, right, .. } = self {
            for child in [left, right] {
                if !child.is_leaf() && Rc::strong_count(child) == 1 {
                    pending.push(mem::replace(child, Rc::new(Self::Leaf(SmolStr::default()))));
                }
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.same_shape(other, true)
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(child) {
                node.detach_children(&mut pending);
            }
        }
    }
}

/// Leaf count of a possibly empty tree
pub fn leaf_count(tree: Option<&Node>) -> usize {
    tree.map_or(0, Node::leaf_count)
}
