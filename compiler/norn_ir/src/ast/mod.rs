//! List-expression AST.
//!
//! A parsed program is one `Expr`. Trees are immutable once built and every
//! node owns its children; nothing is shared between parents.

mod expr;
mod operators;

pub use expr::Expr;
pub use operators::BinaryOp;

#[cfg(test)]
mod tests;
