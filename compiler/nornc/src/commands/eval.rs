//! `norn eval`: evaluate one expression and print the result.

use crate::{format_addresses, Config, Session};

/// Evaluate `source` in a fresh session, after loading `load` if given.
pub fn eval_expression(source: &str, load: Option<&str>, config: Config) {
    let mut session = Session::new(config);

    if let Some(file) = load {
        if let Err(error) = session.load(file) {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }

    match session.eval(source) {
        Ok(addresses) => println!("{}", format_addresses(&addresses)),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}
