//! Parse error kinds and offsets

use rstest::rstest;
use trigger_expr::{ErrorCode, ParseError, TextSize, parse_expression};

#[rstest]
// Missing operand after a connective
#[case("{A:a.last(0)}>5 and", ParseError::EmptyAtom(TextSize::new(19)))]
#[case("{A:a.last(0)}>5 or  ", ParseError::EmptyAtom(TextSize::new(18)))]
#[case("{A:a.last(0)}>5 and )", ParseError::EmptyAtom(TextSize::new(19)))]
#[case("({A:a.last(0)}>5 or) and {B:b.last(0)}<1", ParseError::EmptyAtom(TextSize::new(19)))]
// Leading connective
#[case("and {A:a.last(0)}>5", ParseError::EmptyAtom(TextSize::new(0)))]
// Empty group
#[case("{A:a.last(0)}>5 and ()", ParseError::EmptyAtom(TextSize::new(21)))]
// Parentheses
#[case("({A:a.last(0)}>5", ParseError::UnbalancedParens(TextSize::new(0)))]
#[case("{A:a.last(0)}>5 and (", ParseError::UnbalancedParens(TextSize::new(20)))]
#[case("(({A:a.last(0)}>5)", ParseError::UnbalancedParens(TextSize::new(0)))]
#[case("{A:a.last(0)}>5)", ParseError::UnbalancedParens(TextSize::new(15)))]
// Adjacent operands
#[case("{A:a.last(0)}>5 {B:b.last(0)}<1", ParseError::UnexpectedToken(TextSize::new(16)))]
#[case("({A:a.last(0)}>5) ({B:b.last(0)}<1)", ParseError::UnexpectedToken(TextSize::new(18)))]
fn test_parse_error(#[case] input: &str, #[case] expected: ParseError) {
    assert_eq!(parse_expression(input), Err(expected), "{input}");
}

#[test]
fn test_error_messages_carry_offsets() {
    let err = parse_expression("{A:a.last(0)}>5 and").unwrap_err();
    assert_eq!(err.to_string(), "missing operand at offset 19");
    assert_eq!(err.code(), ErrorCode::E0402);
    assert_eq!(err.format(), "E0402: missing operand at offset 19");
}

#[test]
fn test_no_partial_tree_on_error() {
    assert!(parse_expression("{A:a.last(0)}>5 and {B:b.last(0)}<1 or").is_err());
}
