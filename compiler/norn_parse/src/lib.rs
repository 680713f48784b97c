//! Recursive descent parser for Norn list expressions.
//!
//! Produces one owned `Expr` tree per input line.
//!
//! # Precedence
//!
//! Loosest to tightest: `|` parallel, `;` sequence, `=` definition,
//! `,` union, `!` difference, `*` intersection, then primaries (addresses,
//! list names, parenthesized expressions). Binary operators associate to
//! the left; `=` associates to the right, so `a = b = c` defines `b` inside
//! the definition of `a`.
//!
//! An operand position immediately followed by an operator, `)` or the end
//! of input holds the empty list: `a =` defines `a` as empty and `()` is
//! the empty list.

mod cursor;
mod error;
mod grammar;

use norn_ir::{Expr, TokenKind, TokenList};

use crate::cursor::Cursor;
pub use crate::error::ParseError;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over lexed `tokens` of `source`.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens, source),
        }
    }

    /// Parse the whole token stream as one expression.
    pub fn parse_program(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        let token = self.cursor.current();
        if token.kind != TokenKind::Eof {
            return Err(self.unexpected("an operator or end of input"));
        }
        Ok(expr)
    }
}

/// Lex and parse `source`.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = norn_lexer::lex(source);
    let result = Parser::new(&tokens, source).parse_program();
    if let Err(error) = &result {
        tracing::debug!(%error, source, "parse failed");
    }
    result
}

#[cfg(test)]
mod tests;
