//! Dependency analysis.
//!
//! Computes the names an expression defines or reaches. Used by the cycle
//! resolver (does a binding reach back to the name being defined?) and by
//! the parallel independence check (what does each branch write and touch?).

use norn_ir::{Expr, Name};
use norn_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use crate::Bindings;

pub type NameSet = FxHashSet<Name>;

/// What `names` collects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NameMode {
    /// Every definition target and every list read, following list reads
    /// through their current bindings.
    AllReachable,
    /// Only the targets of definitions written inside the expression
    /// itself. List reads are not followed.
    DefinitionsOnly,
}

/// Names `expr` defines or reaches, per `mode`.
///
/// `seen` holds names whose bindings have already been expanded. A list
/// read of a name in `seen` is still reported but not expanded again, which
/// keeps the walk finite on any environment. Names expanded here are added
/// to `seen`.
pub fn names(expr: &Expr, env: &dyn Bindings, seen: &mut NameSet, mode: NameMode) -> NameSet {
    let mut found = NameSet::default();
    collect(expr, env, seen, mode, &mut found);
    found
}

fn collect(expr: &Expr, env: &dyn Bindings, seen: &mut NameSet, mode: NameMode, found: &mut NameSet) {
    ensure_sufficient_stack(|| match expr {
        Expr::Email(_) | Expr::Empty => {}
        Expr::List(name) => {
            if mode == NameMode::DefinitionsOnly {
                return;
            }
            found.insert(name.clone());
            if seen.insert(name.clone()) {
                // Unbound names expand to the empty list: nothing to add.
                if let Some(bound) = env.lookup(name) {
                    collect(bound, env, seen, mode, found);
                }
            }
        }
        Expr::Binary { left, right, .. } => {
            collect(left, env, seen, mode, found);
            collect(right, env, seen, mode, found);
        }
        Expr::Define { name, body } => {
            found.insert(name.clone());
            collect(body, env, seen, mode, found);
        }
    });
}
