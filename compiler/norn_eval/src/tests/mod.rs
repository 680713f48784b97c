//! Evaluator tests.
//!
//! - `operators`: set operators, sequencing and precedence
//! - `definitions`: bindings, snapshots and cycles
//! - `parallel`: fork/join of independent branches


use crate::{evaluate, AddressSet, Environment, EvalResult};

/// Parse and evaluate `source` against `env`.
fn eval_in(env: &mut Environment, source: &str) -> EvalResult {
    let expr = norn_parse::parse(source).unwrap_or_else(|error| panic!("`{source}`: {error}"));
    evaluate(&expr, env)
}

/// Evaluate each line in a fresh environment, returning the last result.
fn eval_lines(lines: &[&str]) -> (Environment, EvalResult) {
    let mut env = Environment::new();
    let mut result = Ok(AddressSet::new());
    for line in lines {
        result = eval_in(&mut env, line);
    }
    (env, result)
}

fn set(addresses: &[&str]) -> AddressSet {
    addresses.iter().map(|address| (*address).to_string()).collect()
}

/// Rendering of the definition bound to `name`.
fn bound(env: &Environment, name: &str) -> Option<String> {
    env.get(name).map(ToString::to_string)
}
