//! The `Expr` tree.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use super::BinaryOp;
use crate::Name;

/// A list expression.
///
/// | Variant | Meaning |
/// |---|---|
/// | `Email` | a single address |
/// | `Empty` | the list with no addresses |
/// | `List` | a by-name read of an environment binding |
/// | `Binary` | union, intersection, difference, sequence or parallel |
/// | `Define` | bind `name` to `body` |
///
/// A `List` node never owns the expression bound to its name; the binding
/// is looked up each time the node is evaluated.
#[derive(Clone, Debug)]
pub enum Expr {
    Email(String),
    Empty,
    List(Name),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Define {
        name: Name,
        body: Box<Expr>,
    },
}

impl Expr {
    pub fn email(address: impl Into<String>) -> Self {
        Expr::Email(address.into())
    }

    pub fn list(name: impl Into<Name>) -> Self {
        Expr::List(name.into())
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn union(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Union, left, right)
    }

    pub fn intersection(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Intersection, left, right)
    }

    pub fn difference(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Difference, left, right)
    }

    pub fn sequence(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Sequence, left, right)
    }

    pub fn parallel(left: Expr, right: Expr) -> Self {
        Self::binary(BinaryOp::Parallel, left, right)
    }

    pub fn define(name: impl Into<Name>, body: Expr) -> Self {
        Expr::Define {
            name: name.into(),
            body: Box::new(body),
        }
    }
}

// Manual Eq/Hash: a union equals its mirror image, nothing else does.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Email(a), Expr::Email(b)) => a == b,
            (Expr::Empty, Expr::Empty) => true,
            (Expr::List(a), Expr::List(b)) => a == b,
            (
                Expr::Binary { op, left, right },
                Expr::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => {
                op == other_op
                    && ((left == other_left && right == other_right)
                        || (op.is_symmetric() && left == other_right && right == other_left))
            }
            (
                Expr::Define { name, body },
                Expr::Define {
                    name: other_name,
                    body: other_body,
                },
            ) => name == other_name && body == other_body,
            _ => false,
        }
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Expr::Email(address) => {
                0u8.hash(state);
                address.hash(state);
            }
            Expr::Empty => 1u8.hash(state),
            Expr::List(name) => {
                2u8.hash(state);
                name.hash(state);
            }
            Expr::Binary { op, left, right } => {
                3u8.hash(state);
                op.hash(state);
                if op.is_symmetric() {
                    // Sum of operand hashes so both orders agree.
                    fx_hash(left).wrapping_add(fx_hash(right)).hash(state);
                } else {
                    left.hash(state);
                    right.hash(state);
                }
            }
            Expr::Define { name, body } => {
                4u8.hash(state);
                name.hash(state);
                body.hash(state);
            }
        }
    }
}

fn fx_hash(expr: &Expr) -> u64 {
    let mut hasher = FxHasher::default();
    expr.hash(&mut hasher);
    hasher.finish()
}
