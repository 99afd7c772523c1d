#![allow(clippy::multiple_crate_versions)]

//! Cardgrid - command-line front end for the card layout engine.
//!
//! Diagnostics go to stderr and are filtered through `CARDGRID_LOG`
//! (e.g. `CARDGRID_LOG=cardgrid_lib=debug`). Command output goes to stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "CARDGRID_LOG";

fn main() {
    init_tracing();

    if let Err(err) = cardgrid_lib::cli::run() {
        eprintln!("cardgrid: {err}");
        std::process::exit(1);
    }
}

/// Installs the stderr `fmt` subscriber, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
