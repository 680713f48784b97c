use pretty_assertions::assert_eq;

use crate::Expr;

#[test]
fn test_render_leaves() {
    assert_eq!(Expr::email("alice@mit.edu").to_string(), "alice@mit.edu");
    assert_eq!(Expr::Empty.to_string(), "");
    assert_eq!(Expr::list("room").to_string(), "room");
}

#[test]
fn test_render_operators() {
    let a = || Expr::email("a@x");
    let b = || Expr::list("b");
    assert_eq!(Expr::union(a(), b()).to_string(), "(a@x, b)");
    assert_eq!(Expr::intersection(a(), b()).to_string(), "(a@x * b)");
    assert_eq!(Expr::difference(a(), b()).to_string(), "(a@x ! b)");
    assert_eq!(Expr::sequence(a(), b()).to_string(), "(a@x; b)");
    assert_eq!(Expr::parallel(a(), b()).to_string(), "(a@x | b)");
    assert_eq!(Expr::define("room", a()).to_string(), "(room = a@x)");
}

#[test]
fn test_render_empty_operands() {
    assert_eq!(Expr::define("a", Expr::Empty).to_string(), "(a = )");
    assert_eq!(
        Expr::sequence(Expr::Empty, Expr::Empty).to_string(),
        "(; )"
    );
}

#[test]
fn test_render_nested() {
    let expr = Expr::sequence(
        Expr::define("a", Expr::define("b", Expr::list("c"))),
        Expr::union(Expr::list("a"), Expr::email("eve@mit.edu")),
    );
    assert_eq!(expr.to_string(), "((a = (b = c)); (a, eve@mit.edu))");
}
