use pretty_assertions::assert_eq;

use super::*;
use crate::Environment;

fn target(name: &str) -> Name {
    Name::new(name)
}

#[test]
fn test_freeze_leaves_unchanged() {
    let env = Environment::new();
    let expr = Expr::union(Expr::email("a@x"), Expr::Empty);
    assert_eq!(freeze(&expr, &target("room"), &env), Ok(expr));
}

#[test]
fn test_freeze_replaces_self_reference_with_current_definition() {
    let mut env = Environment::new();
    env.define("room", Expr::email("alice@mit.edu"));
    let body = Expr::union(Expr::list("room"), Expr::email("eve@mit.edu"));
    assert_eq!(
        freeze(&body, &target("room"), &env),
        Ok(Expr::union(
            Expr::email("alice@mit.edu"),
            Expr::email("eve@mit.edu")
        ))
    );
}

#[test]
fn test_freeze_unbound_self_reference_is_empty() {
    let env = Environment::new();
    assert_eq!(
        freeze(&Expr::list("room"), &target("room"), &env),
        Ok(Expr::Empty)
    );
}

#[test]
fn test_freeze_keeps_unrelated_reads() {
    let mut env = Environment::new();
    env.define("c", Expr::email("brett@gmail"));
    let body = Expr::define("b", Expr::list("c"));
    assert_eq!(freeze(&body, &target("a"), &env), Ok(body.clone()));
}

#[test]
fn test_freeze_rewrites_inside_definitions() {
    let mut env = Environment::new();
    env.define("a", Expr::email("old@x"));
    let body = Expr::define("b", Expr::list("a"));
    assert_eq!(
        freeze(&body, &target("a"), &env),
        Ok(Expr::define("b", Expr::email("old@x")))
    );
}

#[test]
fn test_freeze_rejects_indirect_cycle() {
    let mut env = Environment::new();
    env.define("a", Expr::list("b"));
    env.define("b", Expr::Empty);
    assert_eq!(
        freeze(&Expr::list("a"), &target("b"), &env),
        Err(EvalError::CycleDetected {
            name: target("b"),
            via: target("a"),
        })
    );
}

#[test]
fn test_freeze_rejects_longer_cycle() {
    let mut env = Environment::new();
    env.define("a", Expr::list("b"));
    env.define("b", Expr::list("c"));
    env.define("c", Expr::Empty);
    let body = Expr::union(Expr::email("x@y"), Expr::list("a"));
    assert!(matches!(
        freeze(&body, &target("c"), &env),
        Err(EvalError::CycleDetected { .. })
    ));
}

#[test]
fn test_freeze_snapshot_is_a_copy() {
    let mut env = Environment::new();
    env.define("room", Expr::email("alice@mit.edu"));
    let snapshot = freeze(&Expr::list("room"), &target("room"), &env);
    env.define("room", Expr::Empty);
    assert_eq!(snapshot, Ok(Expr::email("alice@mit.edu")));
}

#[test]
fn test_check_snapshot_accepts_unrelated_reads() {
    let mut env = Environment::new();
    env.define("b", Expr::email("x@y"));
    let snapshot = Expr::union(Expr::list("b"), Expr::define("c", Expr::list("b")));
    assert_eq!(check_snapshot(&snapshot, &target("a"), &env), Ok(()));
}

#[test]
fn test_check_snapshot_sees_rebound_read() {
    // Passed `freeze` while `b` was unbound; the body then bound `b` to `a`.
    let mut env = Environment::new();
    env.define("b", Expr::list("a"));
    let snapshot = Expr::union(Expr::list("b"), Expr::define("b", Expr::Empty));
    assert_eq!(
        check_snapshot(&snapshot, &target("a"), &env),
        Err(EvalError::CycleDetected {
            name: target("a"),
            via: target("b"),
        })
    );
}

#[test]
fn test_check_snapshot_looks_inside_definitions() {
    let mut env = Environment::new();
    env.define("b", Expr::list("a"));
    let snapshot = Expr::define("c", Expr::list("b"));
    assert!(matches!(
        check_snapshot(&snapshot, &target("a"), &env),
        Err(EvalError::CycleDetected { .. })
    ));
}
