//! Canonical serialization

use rstest::rstest;
use trigger_expr::syntax::{ConnectiveStyle, FormatOptions, serialize_with};
use trigger_expr::{parse_expression, serialize};

use crate::helpers::source_fixtures::*;
use crate::helpers::tree_assertions::{assert_equivalent, parse_tree};

#[rstest]
#[case(AND_PAIR, AND_PAIR)]
#[case(
    OR_OVER_AND,
    "{A:a.last(0)}=1 or ({B:b.last(0)}=1 and {C:c.last(0)}=1)"
)]
#[case(GROUPED_OR, GROUPED_OR)]
#[case(AND_CHAIN, AND_CHAIN)]
#[case(
    "{A:a.last(0)}=1   AND\n{B:b.last(0)}=1",
    "{A:a.last(0)}=1 and {B:b.last(0)}=1"
)]
#[case(
    "{A:a.last(0)}=1 and ({B:b.last(0)}=1 and {C:c.last(0)}=1)",
    "{A:a.last(0)}=1 and ({B:b.last(0)}=1 and {C:c.last(0)}=1)"
)]
#[case("({A:a.last(0)}=1)", "{A:a.last(0)}=1")]
fn test_canonical_text(#[case] input: &str, #[case] expected: &str) {
    let tree = parse_tree(input);
    assert_eq!(serialize(Some(&tree)), expected);
}

#[test]
fn test_empty_expression() {
    let tree = parse_expression("").unwrap();
    assert_eq!(serialize(tree.as_ref()), "");
}

#[rstest]
#[case(AND_PAIR)]
#[case(OR_OVER_AND)]
#[case(GROUPED_OR)]
#[case(AND_CHAIN)]
#[case(NESTED_MIX)]
#[case(QUOTED_THRESHOLD)]
fn test_round_trip(#[case] input: &str) {
    let tree = parse_tree(input);
    let reparsed = parse_tree(&serialize(Some(&tree)));
    assert_equivalent(&reparsed, &tree);
}

#[test]
fn test_uppercase_connectives() {
    let tree = parse_tree(OR_OVER_AND);
    let options = FormatOptions {
        connective_style: ConnectiveStyle::Uppercase,
    };
    assert_eq!(
        serialize_with(Some(&tree), &options),
        "{A:a.last(0)}=1 OR ({B:b.last(0)}=1 AND {C:c.last(0)}=1)"
    );
}
