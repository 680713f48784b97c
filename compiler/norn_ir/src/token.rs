//! Tokens produced by the lexer.
//!
//! Tokens do not carry their text. The parser slices the source with the
//! token's span when it needs an address or a name.

use std::fmt;

use crate::Span;

/// Token kinds of the list-expression language.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// An email address, `[A-Za-z0-9_.+-]+@[A-Za-z0-9_.-]+`.
    Email,
    /// A list name, `[A-Za-z0-9_.-]+`.
    Ident,
    /// `,` union.
    Comma,
    /// `!` difference.
    Bang,
    /// `*` intersection.
    Star,
    /// `=` definition.
    Eq,
    /// `;` sequence.
    Semicolon,
    /// `|` parallel.
    Pipe,
    LParen,
    RParen,
    /// Input the lexer could not recognise.
    Error,
    Eof,
}

impl TokenKind {
    /// Human-readable description used in parse errors.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Email => "an email address",
            TokenKind::Ident => "a list name",
            TokenKind::Comma => "`,`",
            TokenKind::Bang => "`!`",
            TokenKind::Star => "`*`",
            TokenKind::Eq => "`=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Pipe => "`|`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Error => "an unrecognised character",
            TokenKind::Eof => "end of input",
        }
    }

    /// True for tokens that may end an operand: a binary operator, `)`, or
    /// end of input. An operand position directly followed by one of these
    /// holds the empty list.
    pub const fn ends_operand(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Bang
                | TokenKind::Star
                | TokenKind::Semicolon
                | TokenKind::Pipe
                | TokenKind::RParen
                | TokenKind::Eof
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token with its source span.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Lexer output. Always terminated by exactly one `Eof` token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// The token kinds in order, handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}
