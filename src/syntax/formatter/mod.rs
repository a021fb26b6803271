//! Expression formatter
//!
//! Renders a tree back to text. A Binary child is wrapped in parentheses when
//! its connective differs from its parent's, or when the user wrote
//! parentheses around it. Leaves are rendered by a caller-supplied function,
//! which is how the same walk produces both the canonical expression and the
//! label outline.

mod options;


pub use options::{ConnectiveStyle, FormatOptions};

use crate::syntax::{Node, Op};

/// Canonical expression text; the empty tree renders as `""`
pub fn serialize(tree: Option<&Node>) -> String {
    serialize_with(tree, &FormatOptions::default())
}

/// Canonical expression text with explicit [`FormatOptions`]
pub fn serialize_with(tree: Option<&Node>, options: &FormatOptions) -> String {
    format_tree(tree, options, |_, text, out| out.push_str(text))
}

/// Render a tree, calling `leaf(index, text, out)` for every leaf in
/// left-to-right order.
pub fn format_tree<F>(tree: Option<&Node>, options: &FormatOptions, mut leaf: F) -> String
where
    F: FnMut(usize, &str, &mut String),
{
    let Some(root) = tree else {
        return String::new();
    };
    let mut printer = Printer {
        options,
        leaf: &mut leaf,
        next_leaf: 0,
        out: String::new(),
    };
    printer.print(root);
    printer.out
}

/// Pending work of the printer, popped last-in first-out
enum Step<'n> {
    /// Render a node whose parent has the given connective
    Node(&'n Node, Option<Op>),
    Connective(Op),
    Close,
}

struct Printer<'a> {
    options: &'a FormatOptions,
    leaf: &'a mut dyn FnMut(usize, &str, &mut String),
    next_leaf: usize,
    out: String,
}

impl Printer<'_> {
    fn print(&mut self, root: &Node) {
        let mut pending = vec![Step::Node(root, None)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Node(Node::Leaf(text), _) => {
                    (self.leaf)(self.next_leaf, text.as_str(), &mut self.out);
                    self.next_leaf += 1;
                }
                Step::Node(
                    Node::Binary {
                        op,
                        left,
                        right,
                        explicit_parens,
                    },
                    parent,
                ) => {
                    let wrap = *explicit_parens || parent.is_some_and(|p| p != *op);
                    if wrap {
                        self.out.push('(');
                        pending.push(Step::Close);
                    }
                    pending.push(Step::Node(&**right, Some(*op)));
                    pending.push(Step::Connective(*op));
                    pending.push(Step::Node(&**left, Some(*op)));
                }
                Step::Connective(op) => {
                    self.out.push(' ');
                    self.out.push_str(self.options.connective(op));
                    self.out.push(' ');
                }
                Step::Close => self.out.push(')'),
            }
        }
    }
}
