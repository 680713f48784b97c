//! Norn IR - the expression tree shared by the parser and the evaluator.
//!
//! This crate contains:
//! - `Name` for mailing-list names
//! - `Span`, `Token` and `TokenList` for lexer output
//! - `Expr` and `BinaryOp`, the immutable list-expression tree
//! - the canonical rendering of `Expr` (its `Display` impl)
//!
//! # Structural Equality
//!
//! `Expr` implements `PartialEq`/`Hash` structurally. A union compares equal
//! with its operands swapped; every other binary operator and definitions
//! compare left/right in order. Rendering an `Expr` and parsing the text
//! again yields an equal tree.

pub mod ast;
mod name;
mod render;
mod span;
mod token;

pub use ast::{BinaryOp, Expr};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
