//! Test-only binary for CLI integration tests. Unfortunately I can't figure
//! out how to make this compile only in `cfg(test)`. This doesn't actually
//! add anything to the final dependency tree though.

use shoaldoc_cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
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
