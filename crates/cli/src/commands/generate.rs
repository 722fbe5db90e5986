use crate::{GlobalArgs, Subcommand, util::print_json};
use clap::Parser;
use shoaldoc_core::{config::BuildConfig, meta::BuildMeta};
use std::process::ExitCode;

/// Derive the full documentation build metadata and write it to stdout as
/// JSON, for the documentation renderer to consume
#[derive(Clone, Debug, Parser)]
#[clap(visible_alias = "gen")]
pub struct GenerateCommand {
    /// Pretty-print the JSON output
    #[clap(long)]
    pretty: bool,
}

impl Subcommand for GenerateCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        let config = BuildConfig::load(global.config)?;
        let meta = BuildMeta::load(config)?;
        print_json(&meta, self.pretty)?;
        Ok(ExitCode::SUCCESS)
    }
}
