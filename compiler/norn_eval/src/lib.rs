//! Norn Eval - the evaluator for list expressions.
//!
//! # Architecture
//!
//! - `Environment`: the session's name -> definition map, shared by every
//!   evaluation of a session and mutated in place
//! - `Bindings`: the read/write view the evaluator works against, either the
//!   `Environment` itself or a parallel branch's `Overlay`
//! - `names`: dependency analysis, the names an expression defines or reaches
//! - `freeze`: rewrites a definition body so it no longer refers to the name
//!   being defined; `check_snapshot` re-checks that rewrite after the body
//!   has run
//! - `Interpreter`: the recursive evaluator
//! - `check_independence`: the static proof required before the two sides
//!   of `|` run concurrently

mod analysis;
mod environment;
mod errors;
mod interpreter;
mod parallel;
mod resolve;

pub use analysis::{names, NameMode, NameSet};
pub use environment::{Bindings, Environment, Overlay};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{evaluate, AddressSet, Interpreter};
pub use parallel::check_independence;
pub use resolve::{check_snapshot, freeze};

#[cfg(test)]
mod tests;
