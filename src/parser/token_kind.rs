//! Token kinds for trigger expressions
//!
//! The token set is deliberately tiny: a condition is lexed as one opaque
//! token, so only connectives and grouping remain.

use crate::syntax::Op;

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum TokenKind {
    // =========================================================================
    // CONDITIONS
    // =========================================================================
    LEAF, // {host:key.func(params)} > 10

    // =========================================================================
    // CONNECTIVES
    // =========================================================================
    AND_KW, // and / &
    OR_KW,  // or / |

    // =========================================================================
    // GROUPING
    // =========================================================================
    L_PAREN, // (
    R_PAREN, // )
}

impl TokenKind {
    /// Operator for a connective token
    pub fn connective(self) -> Option<Op> {
        match self {
            Self::AND_KW => Some(Op::And),
            Self::OR_KW => Some(Op::Or),
            _ => None,
        }
    }
}

/// Human-readable name of a token kind, for diagnostics
pub fn kind_to_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LEAF => "condition",
        TokenKind::AND_KW => "'and'",
        TokenKind::OR_KW => "'or'",
        TokenKind::L_PAREN => "'('",
        TokenKind::R_PAREN => "')'",
    }
}
