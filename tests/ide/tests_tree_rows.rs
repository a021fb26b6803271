//! Indented tree view

use trigger_expr::Op;
use trigger_expr::ide::{Connector, TreeRow, TreeRowKind, tree_rows};

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_assertions::parse_labelled;

fn rows_of(input: &str) -> Vec<TreeRow> {
    let (tree, labels) = parse_labelled(input);
    tree_rows(tree.as_ref(), &labels)
}

fn render(rows: &[TreeRow]) -> Vec<String> {
    rows.iter().map(|row| row.to_string()).collect()
}

#[test]
fn test_single_leaf() {
    let rows = rows_of(COND_A);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].depth, 0);
    assert!(rows[0].connectors.is_empty());
    assert_eq!(
        rows[0].kind,
        TreeRowKind::Leaf {
            label: "A".into(),
            text: COND_A.into(),
        }
    );
}

#[test]
fn test_same_operator_chain_is_flattened() {
    let rows = rows_of(AND_CHAIN);
    assert_eq!(
        render(&rows),
        vec![
            "And",
            "├─ A {A:a.last(0)}=1",
            "├─ B {B:b.last(0)}=1",
            "└─ C {C:c.last(0)}=1",
        ]
    );
    assert_eq!(rows[0].kind, TreeRowKind::Operator { op: Op::And });
}

#[test]
fn test_nested_connectors() {
    let rows = rows_of(NESTED_MIX);
    assert_eq!(
        render(&rows),
        vec![
            "And",
            "├─ A {h:cpu.load.avg(5m)}>5",
            "├─ Or",
            "│  ├─ B {h:mem.free.last(0)}<{$MEM.LOW}",
            "│  └─ C {h:swap.free.last(0)}<10",
            "└─ D {h:agent.ping.nodata(3m)}=1",
        ]
    );
    assert_eq!(rows[3].connectors, vec![Connector::Pipe, Connector::Branch]);
    assert_eq!(rows[3].depth, 2);
}

#[test]
fn test_last_branch_leaves_blank_rail() {
    let rows = rows_of(OR_OVER_AND);
    assert_eq!(
        render(&rows),
        vec![
            "Or",
            "├─ A {A:a.last(0)}=1",
            "└─ And",
            "   ├─ B {B:b.last(0)}=1",
            "   └─ C {C:c.last(0)}=1",
        ]
    );
    assert_eq!(rows[4].connectors, vec![Connector::Blank, Connector::Last]);
}

#[test]
fn test_explicit_group_is_not_flattened() {
    let rows = rows_of("{A:a.last(0)}=1 and ({B:b.last(0)}=1 and {C:c.last(0)}=1)");
    let operators = rows
        .iter()
        .filter(|row| matches!(row.kind, TreeRowKind::Operator { .. }))
        .count();
    assert_eq!(operators, 2);
    assert_eq!(rows[2].prefix(), "└─ ");
}

#[test]
fn test_leaf_labels_match_label_order() {
    let rows = rows_of(NESTED_MIX);
    let labels: Vec<_> = rows
        .iter()
        .filter_map(|row| row.label())
        .map(|label| label.as_str())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_empty_tree_has_no_rows() {
    assert!(rows_of("").is_empty());
}
