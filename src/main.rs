//! Entry point for the `shoaldoc` binary. See [shoaldoc_cli] for the
//! actual commands.

use shoaldoc_cli::Args;
use std::{io, process::ExitCode};
use tracing_subscriber::{filter::EnvFilter, prelude::*};

fn main() -> ExitCode {
    initialize_tracing();
    let args = Args::parse();
    args.subcommand.execute(args.global).unwrap_or_else(|error| {
        eprintln!("{error}");
        error
            .chain()
            .skip(1)
            .for_each(|cause| eprintln!("  {cause}"));
        ExitCode::FAILURE
    })
}

/// Set up tracing to log to stderr, filtered by `RUST_LOG`. stdout is
/// reserved for the metadata the renderer reads, so diagnostics must stay
/// out of it.
fn initialize_tracing() {
    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::from_default_env());
    tracing_subscriber::registry().with(stderr_subscriber).init();
}
