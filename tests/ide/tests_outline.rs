//! Outline and condition list

use rstest::rstest;
use trigger_expr::ide::{DisplayRow, display_rows, outline, outline_with};
use trigger_expr::syntax::{ConnectiveStyle, FormatOptions};

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_assertions::parse_labelled;

#[rstest]
#[case("", "")]
#[case(COND_A, "A")]
#[case(AND_PAIR, "A and B")]
#[case(OR_OVER_AND, "A or (B and C)")]
#[case(GROUPED_OR, "(A or B) and C")]
#[case(AND_CHAIN, "A and B and C")]
#[case(NESTED_MIX, "A and (B or C) and D")]
fn test_outline(#[case] input: &str, #[case] expected: &str) {
    let (tree, labels) = parse_labelled(input);
    assert_eq!(outline(tree.as_ref(), &labels), expected);
}

#[test]
fn test_outline_symbolic() {
    let (tree, labels) = parse_labelled(OR_OVER_AND);
    let options = FormatOptions {
        connective_style: ConnectiveStyle::Symbolic,
    };
    assert_eq!(outline_with(tree.as_ref(), &labels, &options), "A | (B & C)");
}

#[test]
fn test_display_rows() {
    let (tree, labels) = parse_labelled(AND_PAIR);
    assert_eq!(
        display_rows(tree.as_ref(), &labels),
        vec![
            DisplayRow {
                label: "A".into(),
                text: COND_A.into(),
            },
            DisplayRow {
                label: "B".into(),
                text: COND_B.into(),
            },
        ]
    );
}

#[test]
fn test_display_rows_strictly_increasing() {
    let (tree, labels) = parse_labelled(&condition_chain(30, " or "));
    let rows = display_rows(tree.as_ref(), &labels);
    assert_eq!(rows.len(), 30);
    assert_eq!(rows[25].label.as_str(), "Z");
    assert_eq!(rows[26].label.as_str(), "AA");
    // Shorter labels sort first: Z < AA
    for pair in rows.windows(2) {
        let key = |row: &DisplayRow| (row.label.len(), row.label.clone());
        assert!(key(&pair[0]) < key(&pair[1]), "{pair:?}");
    }
}

#[test]
fn test_display_rows_empty() {
    let (tree, labels) = parse_labelled("   ");
    assert!(display_rows(tree.as_ref(), &labels).is_empty());
}
