//! Assertions over parsed and labelled expressions.

use trigger_expr::syntax::Node;
use trigger_expr::{LabelMap, label, parse_expression};

/// Parse input that must be valid and non-empty.
pub fn parse_tree(input: &str) -> Node {
    match parse_expression(input) {
        Ok(Some(tree)) => tree,
        Ok(None) => panic!("expected a tree, got an empty expression for {input:?}"),
        Err(err) => panic!("failed to parse {input:?}: {err}"),
    }
}

/// Parse and label input that must be valid.
pub fn parse_labelled(input: &str) -> (Option<Node>, LabelMap) {
    let tree = parse_expression(input)
        .unwrap_or_else(|err| panic!("failed to parse {input:?}: {err}"));
    let labels = label(tree.as_ref());
    (tree, labels)
}

pub fn label_names(labels: &LabelMap) -> Vec<String> {
    labels.labels().map(|l| l.to_string()).collect()
}

/// Assert two trees have the same structure and leaves, ignoring grouping.
pub fn assert_equivalent(actual: &Node, expected: &Node) {
    assert!(
        actual.equivalent(expected),
        "trees differ:\n  actual:   {actual:?}\n  expected: {expected:?}"
    );
}
