//! Token cursor for navigating the token stream.

use norn_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over a `TokenList` and the source it was lexed from.
///
/// The list always ends in `Eof` and the cursor never moves past it.
pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    /// Get the current token.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        self.tokens
            .get(self.pos)
            .copied()
            .unwrap_or_else(|| self.eof())
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token after the current one.
    #[inline]
    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.pos + 1)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the current token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Source text of a token.
    #[inline]
    pub(crate) fn text(&self, token: Token) -> &'a str {
        token.span.slice(self.source)
    }

    fn eof(&self) -> Token {
        Token::new(TokenKind::Eof, Span::from_range(self.source.len()..self.source.len()))
    }
}
