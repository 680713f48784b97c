//! Evaluation errors.
//!
//! Neither error is caught or retried by the evaluator. Both abort the
//! current top-level evaluation; environment changes made before the
//! failing node stay in place.

use norn_ir::Name;

use crate::AddressSet;

/// Result of evaluating an expression.
pub type EvalResult = Result<AddressSet, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Defining `name` would read `via`, whose definition reaches back to
    /// `name`. No finite snapshot exists.
    #[error("cycle detected: `{via}` depends on `{name}`, so `{name}` cannot be defined in terms of it")]
    CycleDetected { name: Name, via: Name },

    /// One side of `|` reads or writes a name the other side writes.
    #[error("invalid parallel composition: {} written by one branch and used by the other", join_names(.conflicts))]
    InvalidParallelComposition { conflicts: Vec<Name> },
}

fn join_names(names: &[Name]) -> String {
    names
        .iter()
        .map(|name| format!("`{name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
