//! Lexer for Norn using logos.
//!
//! Turns one line of input into a `TokenList`. Whitespace is insignificant
//! around every operator and is skipped. Unrecognised input becomes a
//! `TokenKind::Error` token so the parser can report it with a span.

use logos::Logos;
use norn_ir::{Span, Token, TokenKind, TokenList};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token(",")]
    Comma,
    #[token("!")]
    Bang,
    #[token("*")]
    Star,
    #[token("=")]
    Eq,
    #[token(";")]
    Semicolon,
    #[token("|")]
    Pipe,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // Longest match wins, so `alice@mit.edu` is an address rather than
    // the name `alice` followed by an error.
    #[regex(r"[A-Za-z0-9_.+\-]+@[A-Za-z0-9_.\-]+")]
    Email,

    #[regex(r"[A-Za-z0-9_.\-]+")]
    Ident,
}

/// Lex source text into a `TokenList` ending in `Eof`.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(raw) => convert_token(raw),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    let eof = Span::from_range(source.len()..source.len());
    result.push(Token::new(TokenKind::Eof, eof));
    result
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Comma => TokenKind::Comma,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Star => TokenKind::Star,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Email => TokenKind::Email,
        RawToken::Ident => TokenKind::Ident,
    }
}
