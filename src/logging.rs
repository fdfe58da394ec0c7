//! Logging setup. Stdout carries the IPC protocol, so all diagnostics go
//! to stderr.
//!
//! Verbosity is controlled via the `SCHOOLSITED_LOG` environment variable
//! (`error`, `warn`, `info`, `debug`).

use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter =
        EnvFilter::try_from_env("SCHOOLSITED_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so a second call (e.g. from tests) is a no-op.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
