//! Expression grammar: the binary operator precedence chain and primaries.

use norn_ir::{BinaryOp, Expr, Name, TokenKind};
use norn_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

const PRIMARY: &str = "an email address, a list name or `(`";

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` because parenthesized groups recurse.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_parallel())
    }

    /// Parse `|` (lowest precedence).
    fn parse_parallel(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_sequence()?;
        while self.cursor.eat(TokenKind::Pipe) {
            let right = self.parse_sequence()?;
            left = Expr::binary(BinaryOp::Parallel, left, right);
        }
        Ok(left)
    }

    /// Parse `;`.
    fn parse_sequence(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_definition()?;
        while self.cursor.eat(TokenKind::Semicolon) {
            let right = self.parse_definition()?;
            left = Expr::binary(BinaryOp::Sequence, left, right);
        }
        Ok(left)
    }

    /// Parse `name = body`, right-associative, or fall through to a union.
    fn parse_definition(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(TokenKind::Ident) && self.cursor.peek_kind() == TokenKind::Eq {
            let name_token = self.cursor.advance();
            let name = Name::new(self.cursor.text(name_token));
            self.cursor.advance();
            let body = ensure_sufficient_stack(|| self.parse_definition())?;
            return Ok(Expr::define(name, body));
        }

        let expr = self.parse_union()?;
        if self.cursor.check(TokenKind::Eq) {
            return Err(ParseError::InvalidDefinitionTarget {
                span: self.cursor.current().span,
            });
        }
        Ok(expr)
    }

    /// Parse `,`.
    fn parse_union(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_difference()?;
        while self.cursor.eat(TokenKind::Comma) {
            let right = self.parse_difference()?;
            left = Expr::binary(BinaryOp::Union, left, right);
        }
        Ok(left)
    }

    /// Parse `!`.
    fn parse_difference(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_intersection()?;
        while self.cursor.eat(TokenKind::Bang) {
            let right = self.parse_intersection()?;
            left = Expr::binary(BinaryOp::Difference, left, right);
        }
        Ok(left)
    }

    /// Parse `*` (highest binary precedence).
    fn parse_intersection(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;
        while self.cursor.eat(TokenKind::Star) {
            let right = self.parse_primary()?;
            left = Expr::binary(BinaryOp::Intersection, left, right);
        }
        Ok(left)
    }

    /// Parse an address, a list name, a parenthesized expression, or the
    /// implicit empty list.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Email => {
                self.cursor.advance();
                Ok(Expr::email(self.cursor.text(token)))
            }
            TokenKind::Ident => {
                self.cursor.advance();
                Ok(Expr::list(self.cursor.text(token)))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                if self.cursor.eat(TokenKind::RParen) {
                    Ok(inner)
                } else if self.cursor.check(TokenKind::Eof) {
                    Err(ParseError::UnclosedParen { span: token.span })
                } else {
                    Err(self.unexpected("`)`"))
                }
            }
            kind if kind.ends_operand() => Ok(Expr::Empty),
            _ => Err(self.unexpected(PRIMARY)),
        }
    }

    /// Error for the current token, which does not fit `expected`.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.cursor.current();
        if token.kind == TokenKind::Error {
            return ParseError::InvalidCharacter {
                text: self.cursor.text(token).to_owned(),
                span: token.span,
            };
        }
        ParseError::UnexpectedToken {
            found: token.kind,
            expected,
            span: token.span,
        }
    }
}
