use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pretty_assertions::{assert_eq, assert_ne};

use super::*;

fn hash_of(expr: &Expr) -> u64 {
    let mut hasher = DefaultHasher::new();
    expr.hash(&mut hasher);
    hasher.finish()
}

fn alice() -> Expr {
    Expr::email("alice@mit.edu")
}

fn bob() -> Expr {
    Expr::email("bob@mit.edu")
}

#[test]
fn test_leaf_equality() {
    assert_eq!(alice(), Expr::email("alice@mit.edu"));
    assert_ne!(alice(), bob());
    assert_eq!(Expr::Empty, Expr::Empty);
    assert_eq!(Expr::list("room"), Expr::list("room"));
    assert_ne!(Expr::list("room"), Expr::email("room"));
}

#[test]
fn test_union_ignores_operand_order() {
    let ab = Expr::union(alice(), bob());
    let ba = Expr::union(bob(), alice());
    assert_eq!(ab, ba);
    assert_eq!(hash_of(&ab), hash_of(&ba));
}

#[test]
fn test_other_operators_respect_operand_order() {
    for op in [
        BinaryOp::Intersection,
        BinaryOp::Difference,
        BinaryOp::Sequence,
        BinaryOp::Parallel,
    ] {
        let ab = Expr::binary(op, alice(), bob());
        let ba = Expr::binary(op, bob(), alice());
        assert_ne!(ab, ba, "{op:?} should be order-dependent");
        assert_eq!(ab, Expr::binary(op, alice(), bob()));
    }
}

#[test]
fn test_nested_union_mirror() {
    let left = Expr::union(Expr::union(alice(), bob()), Expr::list("x"));
    let right = Expr::union(Expr::list("x"), Expr::union(bob(), alice()));
    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
}

#[test]
fn test_operator_mismatch() {
    assert_ne!(
        Expr::union(alice(), bob()),
        Expr::intersection(alice(), bob())
    );
}

#[test]
fn test_definition_equality() {
    assert_eq!(Expr::define("a", alice()), Expr::define("a", alice()));
    assert_ne!(Expr::define("a", alice()), Expr::define("b", alice()));
    assert_ne!(Expr::define("a", alice()), Expr::define("a", bob()));
}
