use pretty_assertions::assert_eq;

use super::*;
use crate::Environment;

fn conflicts(result: Result<(), EvalError>) -> Vec<String> {
    match result {
        Err(EvalError::InvalidParallelComposition { conflicts }) => {
            conflicts.iter().map(|name| name.to_string()).collect()
        }
        other => panic!("expected a parallel conflict, got {other:?}"),
    }
}

#[test]
fn test_disjoint_definitions_are_independent() {
    let env = Environment::new();
    let left = Expr::define("x", Expr::email("a@mit.edu"));
    let right = Expr::define("y", Expr::email("b@mit.edu"));
    assert_eq!(check_independence(&left, &right, &env), Ok(()));
}

#[test]
fn test_shared_reads_are_independent() {
    let mut env = Environment::new();
    env.define("shared", Expr::email("s@x"));
    let left = Expr::define("x", Expr::list("shared"));
    let right = Expr::define("y", Expr::list("shared"));
    assert_eq!(check_independence(&left, &right, &env), Ok(()));
}

#[test]
fn test_read_of_other_sides_write_conflicts() {
    let env = Environment::new();
    let left = Expr::define("x", Expr::email("a@mit.edu"));
    let right = Expr::define("y", Expr::union(Expr::list("x"), Expr::email("b@mit.edu")));
    assert_eq!(conflicts(check_independence(&left, &right, &env)), ["x"]);
}

#[test]
fn test_conflict_detected_in_either_direction() {
    let env = Environment::new();
    let left = Expr::list("x");
    let right = Expr::define("x", Expr::Empty);
    assert_eq!(conflicts(check_independence(&left, &right, &env)), ["x"]);
    assert_eq!(conflicts(check_independence(&right, &left, &env)), ["x"]);
}

#[test]
fn test_both_sides_writing_same_name_conflicts() {
    let env = Environment::new();
    let left = Expr::define("x", Expr::email("a@x"));
    let right = Expr::define("x", Expr::email("b@x"));
    assert_eq!(conflicts(check_independence(&left, &right, &env)), ["x"]);
}

#[test]
fn test_read_through_binding_conflicts() {
    let mut env = Environment::new();
    env.define("alias", Expr::list("x"));
    let left = Expr::define("x", Expr::Empty);
    let right = Expr::list("alias");
    assert_eq!(conflicts(check_independence(&left, &right, &env)), ["x"]);
}

#[test]
fn test_conflicts_are_sorted_and_unique() {
    let env = Environment::new();
    let left = Expr::sequence(
        Expr::define("b", Expr::list("a")),
        Expr::define("a", Expr::Empty),
    );
    let right = Expr::sequence(
        Expr::define("a", Expr::list("b")),
        Expr::define("b", Expr::Empty),
    );
    assert_eq!(conflicts(check_independence(&left, &right, &env)), ["a", "b"]);
}
