//! Console configuration.

use std::path::PathBuf;

/// Directory `/save` and `/load` resolve file names against.
pub const DEFAULT_FILES_DIR: &str = "./files";

/// Environment variable overriding [`DEFAULT_FILES_DIR`].
pub const FILES_DIR_VAR: &str = "NORN_FILES_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Where `/save` writes and `/load` reads.
    pub files_dir: PathBuf,
    /// Printed before each console line is read.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files_dir: PathBuf::from(DEFAULT_FILES_DIR),
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Defaults, with `NORN_FILES_DIR` applied if set and non-empty.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        if let Some(dir) = std::env::var_os(FILES_DIR_VAR).filter(|dir| !dir.is_empty()) {
            config.files_dir = PathBuf::from(dir);
        }
        config
    }

    /// Apply a configuration flag. Returns `false` if `arg` is not one.
    pub fn apply_flag(&mut self, arg: &str) -> bool {
        if let Some(dir) = arg.strip_prefix("--files-dir=") {
            self.files_dir = PathBuf::from(dir);
            true
        } else {
            false
        }
    }
}
