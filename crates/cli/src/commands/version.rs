use crate::{GlobalArgs, Subcommand};
use clap::Parser;
use shoaldoc_core::{config::BuildConfig, version};
use std::process::ExitCode;

/// Resolve and print the release version reported by the version tool
#[derive(Clone, Debug, Parser)]
pub struct VersionCommand {
    /// Print the short X.Y version instead of the full release
    #[clap(long)]
    short: bool,
}

impl Subcommand for VersionCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        let config = BuildConfig::load(global.config)?;
        let version = version::resolve(&config.version_tool)?;
        if self.short {
            println!("{}", version.short);
        } else {
            println!("{}", version.full);
        }
        Ok(ExitCode::SUCCESS)
    }
}
