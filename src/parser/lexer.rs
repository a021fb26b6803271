//! Logos-based lexer for trigger expressions
//!
//! A condition such as `{host:key.last(0)} > 10` is captured verbatim as a
//! single [`TokenKind::LEAF`] token: the brace-delimited reference, then an
//! optional comparison operator and threshold value. Its inner grammar is
//! never decomposed.

use logos::Logos;
use tracing::trace;

use super::errors::ParseError;
use super::options::ParseOptions;
use super::token_kind::TokenKind;
use crate::base::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Source range covered by this token
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    /// Offset just past the end of this token
    pub fn end(&self) -> TextSize {
        self.range().end()
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    options: ParseOptions,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            options,
        }
    }

    fn error_at(&self, start: usize) -> ParseError {
        let offset = TextSize::new(start as u32);
        match self.inner.source()[start..].chars().next() {
            Some('{') => ParseError::UnterminatedLeaf(offset),
            Some(ch) => ParseError::UnexpectedChar(offset, ch),
            // logos never reports an error past the end of input
            None => ParseError::UnexpectedChar(offset, char::REPLACEMENT_CHARACTER),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let start = self.inner.span().start;

        let kind = match logos_token {
            Ok(LogosToken::Amp | LogosToken::Pipe) if !self.options.symbolic_connectives => None,
            Ok(t) => t.kind(),
            Err(()) => None,
        };
        let Some(kind) = kind else {
            return Some(Err(self.error_at(start)));
        };

        let token = Token {
            kind,
            text: self.inner.slice(),
            offset: TextSize::new(start as u32),
        };
        trace!(kind = ?token.kind, offset = start, text = token.text, "lexed token");
        Some(Ok(token))
    }
}

/// Tokenize an entire string, stopping at the first error
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    tokenize_with(input, &ParseOptions::default())
}

/// Tokenize with explicit [`ParseOptions`]
pub fn tokenize_with<'a>(
    input: &'a str,
    options: &ParseOptions,
) -> Result<Vec<Token<'a>>, ParseError> {
    Lexer::with_options(input, *options).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum LogosToken {
    // =========================================================================
    // CONDITIONS
    // =========================================================================
    #[token("{", lex_condition)]
    Condition,

    // =========================================================================
    // CONNECTIVES
    // =========================================================================
    #[token("and", ignore(ascii_case))]
    And,

    #[token("or", ignore(ascii_case))]
    Or,

    #[token("&")]
    Amp,

    #[token("|")]
    Pipe,

    // =========================================================================
    // GROUPING
    // =========================================================================
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // =========================================================================
    // ERRORS
    // =========================================================================
    /// Any other identifier-like run. Matching it as a whole keeps `and` and
    /// `or` word-boundary delimited: `andx` is a `Word`, never `and` + `x`.
    #[regex(r"[A-Za-z0-9_]+", priority = 1)]
    Word,
}

impl LogosToken {
    /// Token kind, or `None` for input that is never valid
    fn kind(self) -> Option<TokenKind> {
        use LogosToken::*;
        match self {
            Condition => Some(TokenKind::LEAF),
            And | Amp => Some(TokenKind::AND_KW),
            Or | Pipe => Some(TokenKind::OR_KW),
            LParen => Some(TokenKind::L_PAREN),
            RParen => Some(TokenKind::R_PAREN),
            Word => None,
        }
    }
}

// =============================================================================
// Condition scanning
// =============================================================================

/// Extend a `{` match over the rest of the condition.
///
/// Returns `false` (a lexer error) when the reference or a quoted threshold
/// is never closed.
fn lex_condition(lex: &mut logos::Lexer<LogosToken>) -> bool {
    match condition_len(lex.remainder().as_bytes()) {
        Some(len) => {
            lex.bump(len);
            true
        }
        None => false,
    }
}

/// Length of a condition following its opening `{`.
///
/// All stop positions are ASCII bytes, so the length always lands on a
/// char boundary.
fn condition_len(rest: &[u8]) -> Option<usize> {
    let reference = braced_len(rest)?;
    let mut end = reference;

    let mut cursor = skip_whitespace(rest, reference);
    if let Some(op) = comparison_len(&rest[cursor..]) {
        cursor += op;
        end = cursor;

        cursor = skip_whitespace(rest, cursor);
        let value = value_len(&rest[cursor..])?;
        if value > 0 {
            end = cursor + value;
        }
    }

    Some(end)
}

/// Length up to and including the `}` closing an already-open brace.
fn braced_len(bytes: &[u8]) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = 0;
    while depth > 0 {
        match bytes.get(i)? {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            b'"' => i += quoted_len(&bytes[i + 1..])?,
            _ => {}
        }
        i += 1;
    }
    Some(i)
}

/// Length up to and including the `"` closing an already-open string.
fn quoted_len(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    loop {
        match bytes.get(i)? {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
}

fn comparison_len(bytes: &[u8]) -> Option<usize> {
    const TWO_CHAR: [&[u8]; 4] = [b"<>", b"<=", b">=", b"!="];
    if TWO_CHAR.iter().any(|op| bytes.starts_with(op)) {
        return Some(2);
    }
    match bytes.first()? {
        b'=' | b'#' | b'<' | b'>' => Some(1),
        _ => None,
    }
}

/// Length of a threshold value; `Some(0)` when there is none.
fn value_len(bytes: &[u8]) -> Option<usize> {
    match bytes.first() {
        Some(b'"') => quoted_len(&bytes[1..]).map(|n| n + 1),
        Some(b'{') => braced_len(&bytes[1..]).map(|n| n + 1),
        _ => {
            let len = bytes
                .iter()
                .position(|&b| b.is_ascii_whitespace() || matches!(b, b'(' | b')' | b'&' | b'|'))
                .unwrap_or(bytes.len());
            let word = &bytes[..len];
            if word.eq_ignore_ascii_case(b"and") || word.eq_ignore_ascii_case(b"or") {
                Some(0)
            } else {
                Some(len)
            }
        }
    }
}

fn skip_whitespace(bytes: &[u8], from: usize) -> usize {
    from + bytes[from..]
        .iter()
        .take_while(|b| b.is_ascii_whitespace())
        .count()
}
