//! Console errors.
//!
//! None of these end a session: the console reports them and reads the
//! next line with the environment as the failing line left it.

use std::path::PathBuf;

use norn_eval::EvalError;
use norn_parse::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown command `{0}` (expected /save, /load or /list)")]
    UnknownCommand(String),

    #[error("`{command}` needs a file name")]
    MissingArgument { command: &'static str },

    /// A line of a loaded file failed. Lines before it stay evaluated.
    #[error("{}:{line}: {error}", .path.display())]
    Load {
        path: PathBuf,
        line: usize,
        #[source]
        error: Box<SessionError>,
    },
}
