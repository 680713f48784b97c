//! Norn console.
//!
//! A `Session` holds one environment for its whole lifetime and runs console
//! lines against it: expressions are parsed and evaluated, and lines
//! starting with `/` are commands (`/save`, `/load`, `/list`).
//!
//! ```text
//! line ──► Session::execute ──► norn_parse::parse ──► norn_eval::evaluate
//!                    │
//!                    └──► /save, /load, /list  (files under Config::files_dir)
//! ```

use std::sync::Once;

pub mod commands;
mod config;
mod error;
mod session;

pub use config::{Config, DEFAULT_FILES_DIR, FILES_DIR_VAR};
pub use error::SessionError;
pub use session::{format_addresses, Outcome, Session};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set, e.g.
/// `RUST_LOG=norn_eval=debug norn`. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
