//! Parsing options

/// Options controlling which syntax the lexer accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Accept `&` for `and` and `|` for `or` (legacy trigger syntax)
    pub symbolic_connectives: bool,
}

impl ParseOptions {
    /// Options accepting the legacy `&` / `|` connectives
    pub fn legacy() -> Self {
        Self {
            symbolic_connectives: true,
        }
    }
}
