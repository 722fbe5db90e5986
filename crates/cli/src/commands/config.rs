use crate::{GlobalArgs, Subcommand, util::print_yaml};
use clap::Parser;
use shoaldoc_core::config::BuildConfig;
use std::process::ExitCode;

/// View the effective documentation build configuration
#[derive(Clone, Debug, Parser)]
pub struct ConfigCommand {
    /// Print the path of the config file and exit; overrides all other
    /// arguments
    #[clap(long)]
    path: bool,
}

impl Subcommand for ConfigCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        if self.path {
            let path = global.config.unwrap_or_else(BuildConfig::path);
            println!("{}", path.display());
        } else {
            let config = BuildConfig::load(global.config)?;
            print_yaml(&config)?;
        }
        Ok(ExitCode::SUCCESS)
    }
}
