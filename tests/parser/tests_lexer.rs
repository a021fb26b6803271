//! Tokenizer tests

use rstest::rstest;
use trigger_expr::parser::{ParseOptions, TokenKind, kind_to_name, tokenize, tokenize_with};
use trigger_expr::{ParseError, TextSize};

use crate::helpers::source_fixtures::*;

#[rstest]
#[case(COND_A)]
#[case(CPU_HIGH)]
#[case(MACRO_THRESHOLD)]
#[case(QUOTED_THRESHOLD)]
#[case(NO_COMPARISON)]
fn test_condition_is_one_token(#[case] input: &str) {
    let tokens = tokenize(input).unwrap();
    assert_eq!(tokens.len(), 1, "{input}");
    assert_eq!(tokens[0].kind, TokenKind::LEAF);
    assert_eq!(tokens[0].text, input);
}

#[test]
fn test_token_offsets() {
    let tokens = tokenize(AND_PAIR).unwrap();
    let offsets: Vec<u32> = tokens.iter().map(|t| t.offset.into()).collect();
    assert_eq!(offsets, vec![0, 16, 20]);
    assert_eq!(tokens[2].end(), TextSize::of(AND_PAIR));
}

#[rstest]
#[case("and", TokenKind::AND_KW)]
#[case("AND", TokenKind::AND_KW)]
#[case("aNd", TokenKind::AND_KW)]
#[case("or", TokenKind::OR_KW)]
#[case("OR", TokenKind::OR_KW)]
fn test_connective_case_insensitive(#[case] connective: &str, #[case] expected: TokenKind) {
    let input = format!("{COND_A} {connective} {COND_B}");
    let tokens = tokenize(&input).unwrap();
    assert_eq!(tokens[1].kind, expected);
    assert_eq!(tokens[1].text, connective);
}

#[rstest]
#[case("{A:a.last(0)}>5 oranges", 16, 'o')]
#[case("{A:a.last(0)}>5 and_ {B:b.last(0)}<1", 16, 'a')]
#[case("{A:a.last(0)}>5 ; {B:b.last(0)}<1", 16, ';')]
#[case("not {A:a.last(0)}>5", 0, 'n')]
fn test_unexpected_char(#[case] input: &str, #[case] offset: u32, #[case] ch: char) {
    assert_eq!(
        tokenize(input).unwrap_err(),
        ParseError::UnexpectedChar(TextSize::new(offset), ch)
    );
}

#[test]
fn test_multibyte_unexpected_char() {
    let err = tokenize("{A:a.last(0)}>5 é").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedChar(TextSize::new(16), 'é'));
    assert_eq!(u32::from(err.range().len()), 2);
}

#[test]
fn test_unterminated_leaf_offset() {
    assert_eq!(
        tokenize("{A:a.last(0)}>5 or {B:b.last(0)").unwrap_err(),
        ParseError::UnterminatedLeaf(TextSize::new(19))
    );
}

#[test]
fn test_symbolic_connectives_are_opt_in() {
    let input = "{A:a.last(0)}>5|{B:b.last(0)}<1";
    assert_eq!(
        tokenize(input).unwrap_err(),
        ParseError::UnexpectedChar(TextSize::new(15), '|')
    );

    let tokens = tokenize_with(input, &ParseOptions::legacy()).unwrap();
    let kinds: Vec<&str> = tokens.iter().map(|t| kind_to_name(t.kind)).collect();
    assert_eq!(kinds, vec!["condition", "'or'", "condition"]);
}

#[test]
fn test_internal_whitespace_preserved() {
    let input = format!("  {CPU_HIGH}   and {CPU_HIGH_2}\n");
    let tokens = tokenize(&input).unwrap();
    assert_eq!(tokens[0].text, CPU_HIGH);
    assert_eq!(tokens[2].text, CPU_HIGH_2);
}
