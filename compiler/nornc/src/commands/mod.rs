//! Command handlers for the `norn` CLI.
//!
//! Each submodule implements one CLI command. Handlers report failures on
//! stderr and exit with status 1.

mod eval;
mod repl;

pub use eval::eval_expression;
pub use repl::{repl, run_repl};
