//! Recursive descent parser for trigger expressions
//!
//! ```text
//! expr     := or_expr
//! or_expr  := and_expr ( OR and_expr )*
//! and_expr := atom ( AND atom )*
//! atom     := LEAF | LPAREN expr RPAREN
//! ```
//!
//! `and` binds tighter than `or`; both are left-associative. Parentheses
//! around a Binary node are remembered on that node so the user's grouping
//! survives re-serialization.
//!
//! Chains are built in a loop, so only groups recurse. Both the group nesting
//! and the depth of the resulting tree are capped at [`MAX_DEPTH`].

use tracing::debug;

use super::errors::ParseError;
use super::lexer::{Token, tokenize_with};
use super::options::ParseOptions;
use super::token_kind::{TokenKind, kind_to_name};
use crate::base::TextSize;
use crate::syntax::{MAX_DEPTH, Node, Op};

/// Parse a token stream. `Ok(None)` means the input held no tokens.
pub fn parse(tokens: &[Token<'_>]) -> Result<Option<Node>, ParseError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser::new(tokens);
    let Parsed { node: root, depth } = parser.parse_or_expr()?;
    parser.finish()?;

    debug!(
        tokens = tokens.len(),
        leaves = root.leaf_count(),
        depth,
        "parsed expression"
    );
    Ok(Some(root))
}

/// Tokenize and parse expression text
pub fn parse_expression(input: &str) -> Result<Option<Node>, ParseError> {
    parse_expression_with(input, &ParseOptions::default())
}

/// Tokenize and parse expression text with explicit [`ParseOptions`]
pub fn parse_expression_with(
    input: &str,
    options: &ParseOptions,
) -> Result<Option<Node>, ParseError> {
    let tokens = tokenize_with(input, options)?;
    parse(&tokens)
}

/// Check that `input` is exactly one condition.
///
/// Used to vet text before it is spliced into a tree as a new leaf.
pub fn validate_condition(input: &str, options: &ParseOptions) -> Result<(), ParseError> {
    let tokens = tokenize_with(input, options)?;
    let Some(first) = tokens.first() else {
        return Err(ParseError::EmptyAtom(TextSize::of(input)));
    };
    if first.kind != TokenKind::LEAF {
        return Err(ParseError::UnexpectedToken(first.offset));
    }
    match tokens.get(1) {
        Some(extra) => Err(ParseError::UnexpectedToken(extra.offset)),
        None => Ok(()),
    }
}

/// A parsed subtree and the length of its longest leaf path
struct Parsed {
    node: Node,
    depth: usize,
}

/// The parser state
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    /// Open groups around the current position
    groups: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            groups: 0,
        }
    }

    /// Everything must be consumed once the top-level expression ends
    fn finish(&self) -> Result<(), ParseError> {
        match self.current() {
            None => Ok(()),
            Some(token) if token.kind == TokenKind::R_PAREN => {
                Err(ParseError::UnbalancedParens(token.offset))
            }
            Some(token) => {
                debug!(found = kind_to_name(token.kind), offset = ?token.offset, "trailing input");
                Err(ParseError::UnexpectedToken(token.offset))
            }
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn previous(&self) -> Option<&'t Token<'a>> {
        self.pos.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> Option<&'t Token<'a>> {
        if self.at(kind) { self.bump() } else { None }
    }

    fn eat_connective(&mut self, op: Op) -> Option<&'t Token<'a>> {
        match self.current() {
            Some(token) if token.kind.connective() == Some(op) => self.bump(),
            _ => None,
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    /// A required operand is absent at the current position.
    ///
    /// Reported just past the previous token (a dangling connective or `(`);
    /// at the very start of input, at the offending token itself.
    fn missing_operand(&self) -> ParseError {
        match (self.previous(), self.current()) {
            (Some(prev), _) => ParseError::EmptyAtom(prev.end()),
            (None, Some(token)) => ParseError::EmptyAtom(token.offset),
            (None, None) => ParseError::EmptyAtom(TextSize::new(0)),
        }
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    /// or_expr := and_expr ( OR and_expr )*
    fn parse_or_expr(&mut self) -> Result<Parsed, ParseError> {
        self.parse_chain(Op::Or, Self::parse_and_expr)
    }

    /// and_expr := atom ( AND atom )*
    fn parse_and_expr(&mut self) -> Result<Parsed, ParseError> {
        self.parse_chain(Op::And, Self::parse_atom)
    }

    /// operand ( op operand )*, folded to the left
    fn parse_chain(
        &mut self,
        op: Op,
        operand: fn(&mut Self) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        let mut left = operand(self)?;
        while let Some(connective) = self.eat_connective(op) {
            let right = operand(self)?;
            let depth = left.depth.max(right.depth) + 1;
            if depth > MAX_DEPTH {
                return Err(ParseError::TooDeep(connective.offset));
            }
            left = Parsed {
                node: Node::binary(op, left.node, right.node),
                depth,
            };
        }
        Ok(left)
    }

    /// atom := LEAF | LPAREN expr RPAREN
    fn parse_atom(&mut self) -> Result<Parsed, ParseError> {
        let Some(token) = self.current() else {
            return Err(match self.previous() {
                Some(open) if open.kind == TokenKind::L_PAREN => {
                    ParseError::UnbalancedParens(open.offset)
                }
                _ => self.missing_operand(),
            });
        };

        match token.kind {
            TokenKind::LEAF => {
                self.bump();
                Ok(Parsed {
                    node: Node::leaf(token.text),
                    depth: 0,
                })
            }
            TokenKind::L_PAREN => self.parse_group(),
            TokenKind::R_PAREN if self.previous().is_none() => {
                Err(ParseError::UnbalancedParens(token.offset))
            }
            TokenKind::R_PAREN | TokenKind::AND_KW | TokenKind::OR_KW => {
                Err(self.missing_operand())
            }
        }
    }

    fn parse_group(&mut self) -> Result<Parsed, ParseError> {
        let Some(open) = self.eat(TokenKind::L_PAREN) else {
            return Err(self.missing_operand());
        };
        if self.groups == MAX_DEPTH {
            return Err(ParseError::TooDeep(open.offset));
        }

        self.groups += 1;
        let inner = self.parse_or_expr()?;
        self.groups -= 1;

        match self.current() {
            Some(close) if close.kind == TokenKind::R_PAREN => {
                self.bump();
                Ok(Parsed {
                    node: inner.node.parenthesized(),
                    depth: inner.depth,
                })
            }
            Some(other) => Err(ParseError::UnexpectedToken(other.offset)),
            None => Err(ParseError::UnbalancedParens(open.offset)),
        }
    }
}
