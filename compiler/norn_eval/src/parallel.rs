//! Static independence check for `|`.
//!
//! The two sides of a parallel composition may run at the same time, so
//! neither may read or write a name the other writes. Writes are the
//! definitions written directly inside a branch; reads follow list
//! references through the bindings current when the check runs.
//!
//! Writes reached only through a list reference are not counted. Such a
//! branch still gets a deterministic result because each side evaluates
//! against its own overlay and the writes are committed left then right.

use norn_ir::{Expr, Name};

use crate::analysis::{names, NameMode, NameSet};
use crate::{Bindings, EvalError};

/// Check that `left | right` may run in parallel against `env`.
///
/// Fails with `InvalidParallelComposition` listing, in sorted order, every
/// name one side writes and the other side reads or writes.
pub fn check_independence(left: &Expr, right: &Expr, env: &dyn Bindings) -> Result<(), EvalError> {
    let left_writes = names(left, env, &mut NameSet::default(), NameMode::DefinitionsOnly);
    let right_writes = names(right, env, &mut NameSet::default(), NameMode::DefinitionsOnly);
    let left_touches = names(left, env, &mut NameSet::default(), NameMode::AllReachable);
    let right_touches = names(right, env, &mut NameSet::default(), NameMode::AllReachable);

    let mut conflicts: Vec<Name> = left_touches
        .intersection(&right_writes)
        .chain(right_touches.intersection(&left_writes))
        .cloned()
        .collect();
    if conflicts.is_empty() {
        return Ok(());
    }

    conflicts.sort();
    conflicts.dedup();
    tracing::warn!(?conflicts, "parallel branches are not independent");
    Err(EvalError::InvalidParallelComposition { conflicts })
}

#[cfg(test)]
mod tests;
