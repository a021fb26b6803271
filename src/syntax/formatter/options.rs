//! Formatting options

use crate::syntax::Op;

/// How connectives are spelled in rendered expressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConnectiveStyle {
    /// `and` / `or`
    #[default]
    Lowercase,
    /// `AND` / `OR`
    Uppercase,
    /// `&` / `|`, readable only with legacy parse options
    Symbolic,
}

/// Formatting options for trigger expressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Spelling of `and` / `or`
    pub connective_style: ConnectiveStyle,
}

impl FormatOptions {
    /// Text emitted for a connective
    pub fn connective(&self, op: Op) -> &'static str {
        match (self.connective_style, op) {
            (ConnectiveStyle::Lowercase, op) => op.keyword(),
            (ConnectiveStyle::Uppercase, Op::And) => "AND",
            (ConnectiveStyle::Uppercase, Op::Or) => "OR",
            (ConnectiveStyle::Symbolic, op) => op.symbol(),
        }
    }
}
