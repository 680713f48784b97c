//! A console session: one environment, many lines.

use std::fs;
use std::path::{Path, PathBuf};

use norn_eval::{evaluate, AddressSet, Environment};
use norn_ir::Name;

use crate::{Config, SessionError};

/// What a successfully executed line produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An expression was evaluated.
    Addresses(AddressSet),
    /// `/save` wrote `bindings` definitions to `path`.
    Saved { path: PathBuf, bindings: usize },
    /// `/load` evaluated `lines` lines of `path`.
    Loaded { path: PathBuf, lines: usize },
    /// `/list`: the bound names, sorted.
    Names(Vec<Name>),
}

impl Outcome {
    /// The text to print for this outcome, if any.
    ///
    /// An evaluated expression always prints, even when its result is
    /// empty. `/save` and `/load` print nothing.
    pub fn output(&self) -> Option<String> {
        match self {
            Outcome::Addresses(addresses) => Some(format_addresses(addresses)),
            Outcome::Names(names) => Some(
                names
                    .iter()
                    .map(Name::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Outcome::Saved { .. } | Outcome::Loaded { .. } => None,
        }
    }
}

/// Addresses in sorted order, separated by `", "`.
pub fn format_addresses(addresses: &AddressSet) -> String {
    addresses
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct Session {
    env: Environment,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Session {
            env: Environment::new(),
            config,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one console line.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, SessionError> {
        let line = line.trim();
        match line.strip_prefix('/') {
            Some(command) => self.command(command),
            None => self.eval(line).map(Outcome::Addresses),
        }
    }

    fn command(&mut self, text: &str) -> Result<Outcome, SessionError> {
        let mut words = text.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();
        tracing::debug!(command, argument, "session command");
        match command {
            "save" => {
                let file = argument.ok_or(SessionError::MissingArgument { command: "/save" })?;
                self.save(file)
            }
            "load" => {
                let file = argument.ok_or(SessionError::MissingArgument { command: "/load" })?;
                self.load(file)
            }
            "list" => Ok(Outcome::Names(
                self.env
                    .sorted()
                    .into_iter()
                    .map(|(name, _)| name.clone())
                    .collect(),
            )),
            other => Err(SessionError::UnknownCommand(format!("/{other}"))),
        }
    }

    /// Parse and evaluate an expression against the session environment.
    pub fn eval(&mut self, source: &str) -> Result<AddressSet, SessionError> {
        let expr = norn_parse::parse(source)?;
        Ok(evaluate(&expr, &mut self.env)?)
    }

    /// Write every binding as a `name = definition` line, sorted by name.
    ///
    /// `/load` evaluates these lines, so a definition nested inside a saved
    /// body runs again and can overwrite a binding an earlier line restored.
    pub fn save(&self, file: &str) -> Result<Outcome, SessionError> {
        let path = self.config.files_dir.join(file);
        fs::create_dir_all(&self.config.files_dir)
            .map_err(|source| io_error(&self.config.files_dir, source))?;

        let bindings = self.env.sorted();
        let contents: String = bindings
            .iter()
            .map(|(name, expr)| format!("{name} = {expr}\n"))
            .collect();
        fs::write(&path, contents).map_err(|source| io_error(&path, source))?;

        tracing::debug!(path = %path.display(), bindings = bindings.len(), "saved");
        Ok(Outcome::Saved {
            path,
            bindings: bindings.len(),
        })
    }

    /// Evaluate every non-blank line of a file, in order.
    ///
    /// Lines are expressions like any other console input, not raw
    /// bindings. Stops at the first line that fails; earlier lines keep
    /// their effects.
    pub fn load(&mut self, file: &str) -> Result<Outcome, SessionError> {
        let path = self.config.files_dir.join(file);
        let text = fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;

        let mut lines = 0;
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            self.eval(line).map_err(|error| SessionError::Load {
                path: path.clone(),
                line: index + 1,
                error: Box::new(error),
            })?;
            lines += 1;
        }

        tracing::debug!(path = %path.display(), lines, "loaded");
        Ok(Outcome::Loaded { path, lines })
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.to_path_buf(),
        source,
    }
}
