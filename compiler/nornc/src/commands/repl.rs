//! The interactive console.

use std::io::{self, BufRead, Write};

use crate::{Config, Session};

/// Run the console on stdin/stdout until an empty line or end of input.
pub fn run_repl(config: Config) {
    let mut session = Session::new(config);
    let stdin = io::stdin();
    let result = repl(&mut session, stdin.lock(), io::stdout(), io::stderr());
    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Read lines from `input` and run each against `session`.
///
/// Results go to `output`, errors to `errors`; an error does not end the
/// loop. Stops at an empty line or end of input.
pub fn repl(
    session: &mut Session,
    mut input: impl BufRead,
    mut output: impl Write,
    mut errors: impl Write,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", session.config().prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line.is_empty() {
            return Ok(());
        }

        match session.execute(line) {
            Ok(outcome) => {
                if let Some(text) = outcome.output() {
                    writeln!(output, "{text}")?;
                }
            }
            Err(error) => writeln!(errors, "error: {error}")?,
        }
    }
}
