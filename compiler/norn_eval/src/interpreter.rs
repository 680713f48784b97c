//! The recursive evaluator.
//!
//! Maps an expression and the bindings it runs against to a set of
//! addresses, mutating the bindings as definitions and first reads of
//! unbound names are evaluated.
//!
//! # Ordering
//!
//! Every binary operator evaluates its left side fully before its right
//! side, so environment changes made on the left are visible on the right.
//! `|` is the only exception: after the independence check, both sides run
//! concurrently on their own `Overlay`s and join before evaluation goes on.

use std::collections::BTreeSet;
use std::sync::Arc;

use norn_ir::{BinaryOp, Expr, Name};
use norn_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::parallel::check_independence;
use crate::resolve::{check_snapshot, freeze};
use crate::{Bindings, EvalError, EvalResult, Overlay};

/// Evaluated addresses, kept sorted.
pub type AddressSet = BTreeSet<String>;

/// Tree-walking evaluator over a set of bindings.
pub struct Interpreter<'env> {
    env: &'env mut dyn Bindings,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env mut dyn Bindings) -> Self {
        Interpreter { env }
    }

    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` because nested operators and list
    /// reads recurse.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Email(address) => Ok(AddressSet::from([address.clone()])),
            Expr::Empty => Ok(AddressSet::new()),
            Expr::List(name) => self.eval_list(name),
            Expr::Binary { op, left, right } => self.eval_binary(*op, left, right),
            Expr::Define { name, body } => self.eval_define(name, body),
        }
    }

    /// Read a list: evaluate its current definition, or bind it to the
    /// empty list if it has none.
    fn eval_list(&mut self, name: &Name) -> EvalResult {
        match self.env.lookup(name).cloned() {
            Some(definition) => self.eval(&definition),
            None => {
                tracing::trace!(%name, "unbound list read as empty");
                self.env.bind(name.clone(), Arc::new(Expr::Empty));
                Ok(AddressSet::new())
            }
        }
    }

    fn eval_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) -> EvalResult {
        match op {
            BinaryOp::Union => {
                let mut result = self.eval(left)?;
                result.extend(self.eval(right)?);
                Ok(result)
            }
            BinaryOp::Intersection => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(left.intersection(&right).cloned().collect())
            }
            BinaryOp::Difference => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(left.difference(&right).cloned().collect())
            }
            BinaryOp::Sequence => {
                self.eval(left)?;
                self.eval(right)
            }
            BinaryOp::Parallel => self.eval_parallel(left, right),
        }
    }

    /// `name = body`.
    ///
    /// The body is evaluated as written, so a read of `name` inside it sees
    /// the previous definition. The binding stored afterwards is the frozen
    /// snapshot, taken before anything in the body runs and checked again
    /// once it has run.
    fn eval_define(&mut self, name: &Name, body: &Expr) -> EvalResult {
        let snapshot = freeze(body, name, &*self.env)?;
        let result = self.eval(body)?;
        check_snapshot(&snapshot, name, &*self.env)?;
        tracing::debug!(%name, %snapshot, "list defined");
        self.env.bind(name.clone(), Arc::new(snapshot));
        Ok(result)
    }

    /// `left | right`: prove independence, fork, join, then commit.
    ///
    /// Each side writes into its own overlay over the current bindings.
    /// Only when both sides succeed are their writes committed, left first.
    /// The result is always the empty set.
    fn eval_parallel(&mut self, left: &Expr, right: &Expr) -> EvalResult {
        check_independence(left, right, &*self.env)?;

        let parent: &dyn Bindings = &*self.env;
        tracing::debug!("forking parallel branches");
        let (left_writes, right_writes) = rayon::join(
            move || run_branch(left, parent),
            move || run_branch(right, parent),
        );
        let left_writes = left_writes?;
        let right_writes = right_writes?;

        for (name, definition) in left_writes.into_iter().chain(right_writes) {
            self.env.bind(name, definition);
        }
        Ok(AddressSet::new())
    }
}

/// Evaluate one side of `|` and hand back what it wrote.
fn run_branch(branch: &Expr, parent: &dyn Bindings) -> Result<FxHashMap<Name, Arc<Expr>>, EvalError> {
    let mut overlay = Overlay::new(parent);
    Interpreter::new(&mut overlay).eval(branch)?;
    Ok(overlay.into_writes())
}

/// Evaluate `expr` against `env`.
#[tracing::instrument(level = "trace", skip_all, fields(expr = %expr))]
pub fn evaluate(expr: &Expr, env: &mut dyn Bindings) -> EvalResult {
    Interpreter::new(env).eval(expr)
}
