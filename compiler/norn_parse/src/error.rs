//! Parse error types.

use norn_ir::{Span, TokenKind};

/// Input that does not match the list-expression grammar.
///
/// Raised before any evaluation, so a failed parse never touches the
/// environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected {found} at {span}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
        span: Span,
    },

    #[error("unrecognised input `{text}` at {span}")]
    InvalidCharacter { text: String, span: Span },

    #[error("unclosed `(` opened at {span}")]
    UnclosedParen { span: Span },

    #[error("only a list name can be defined, found `=` at {span}")]
    InvalidDefinitionTarget { span: Span },
}

impl ParseError {
    /// Location of the offending input.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::InvalidCharacter { span, .. }
            | ParseError::UnclosedParen { span }
            | ParseError::InvalidDefinitionTarget { span } => *span,
        }
    }
}
