mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::EnvFilter;

use crate::core::error::PlotError;

/// Diagnostics go to stderr; `RUST_LOG` overrides `--debug`.
fn init_tracing(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // an already-installed global subscriber keeps precedence
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<(), PlotError> {
    let cli = parse::Cli::parse();
    init_tracing(cli.debug);
    if cli.styles {
        handlers::styles();
        return Ok(());
    }
    handlers::plot(&cli)
}
