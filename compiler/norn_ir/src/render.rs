//! Canonical rendering.
//!
//! Every compound node is wrapped in parentheses, so the rendering never
//! depends on operator precedence and always parses back to an equal tree.
//!
//! | Node | Text |
//! |---|---|
//! | `Email(a)` | `a` |
//! | `Empty` | (nothing) |
//! | `List(n)` | `n` |
//! | `Binary(op, l, r)` | `(l, r)` `(l ! r)` `(l * r)` `(l; r)` `(l | r)` |
//! | `Define(n, b)` | `(n = b)` |

use std::fmt;

use crate::Expr;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Email(address) => f.write_str(address),
            Expr::Empty => Ok(()),
            Expr::List(name) => write!(f, "{name}"),
            Expr::Binary { op, left, right } => {
                write!(f, "({left}{}{right})", op.separator())
            }
            Expr::Define { name, body } => write!(f, "({name} = {body})"),
        }
    }
}

#[cfg(test)]
mod tests;
