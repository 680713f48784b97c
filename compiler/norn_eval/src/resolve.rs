//! Self-reference freezing for definitions.
//!
//! `room = room, x@y` must not make `room` refer to itself forever. Before
//! the binding is replaced, every read of `room` in the body is swapped
//! for the definition `room` has *now*, giving a snapshot with no
//! self-reference. A read of some other list whose definition reaches
//! `room` cannot be frozen that way and is rejected as a cycle.

use norn_ir::{Expr, Name};
use norn_stack::ensure_sufficient_stack;

use crate::analysis::{names, NameMode, NameSet};
use crate::{Bindings, EvalError};

/// Rewrite `expr` so it no longer reads `target`.
///
/// - A read of `target` becomes a copy of `target`'s current definition
///   (the empty list if unbound).
/// - A read of any other name whose definition reaches `target` fails with
///   `CycleDetected`.
/// - Everything else is rebuilt unchanged.
pub fn freeze(expr: &Expr, target: &Name, env: &dyn Bindings) -> Result<Expr, EvalError> {
    ensure_sufficient_stack(|| match expr {
        Expr::Email(_) | Expr::Empty => Ok(expr.clone()),
        Expr::List(name) if name == target => Ok(env
            .lookup(name)
            .map_or(Expr::Empty, |definition| (**definition).clone())),
        Expr::List(name) => {
            check_read(name, target, env)?;
            Ok(expr.clone())
        }
        Expr::Binary { op, left, right } => Ok(Expr::binary(
            *op,
            freeze(left, target, env)?,
            freeze(right, target, env)?,
        )),
        Expr::Define { name, body } => Ok(Expr::define(name.clone(), freeze(body, target, env)?)),
    })
}

/// Re-check a frozen snapshot against the bindings as they stand after
/// the definition body ran.
///
/// Definitions nested in the body can rebind names the snapshot reads, so
/// a snapshot that passed `freeze` may reach `target` by the time it would
/// be bound. Binding it then would make every later read of `target` loop.
pub fn check_snapshot(snapshot: &Expr, target: &Name, env: &dyn Bindings) -> Result<(), EvalError> {
    ensure_sufficient_stack(|| match snapshot {
        Expr::Email(_) | Expr::Empty => Ok(()),
        Expr::List(name) if name == target => Err(cycle(target, name)),
        Expr::List(name) => check_read(name, target, env),
        Expr::Binary { left, right, .. } => {
            check_snapshot(left, target, env)?;
            check_snapshot(right, target, env)
        }
        Expr::Define { body, .. } => check_snapshot(body, target, env),
    })
}

/// Fail if the definition bound to `name` reaches `target`.
fn check_read(name: &Name, target: &Name, env: &dyn Bindings) -> Result<(), EvalError> {
    let Some(definition) = env.lookup(name) else {
        return Ok(());
    };
    let reached = names(definition, env, &mut NameSet::default(), NameMode::AllReachable);
    if reached.contains(target) {
        return Err(cycle(target, name));
    }
    Ok(())
}

fn cycle(target: &Name, via: &Name) -> EvalError {
    tracing::warn!(name = %target, via = %via, "cycle detected");
    EvalError::CycleDetected {
        name: target.clone(),
        via: via.clone(),
    }
}

#[cfg(test)]
mod tests;
