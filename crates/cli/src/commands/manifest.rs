use crate::{
    GlobalArgs, Subcommand,
    util::{print_json, print_table},
};
use clap::Parser;
use itertools::Itertools;
use shoaldoc_core::{config::BuildConfig, manifest};
use std::process::ExitCode;

/// Assemble and print the man page manifest: the fixed pages, then one
/// page per discovered command doc
#[derive(Clone, Debug, Parser)]
pub struct ManifestCommand {
    /// Print as JSON instead of a table
    #[clap(long)]
    json: bool,
}

impl Subcommand for ManifestCommand {
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        let config = BuildConfig::load(global.config)?;
        let manifest =
            manifest::assemble(&config.man_pages, &config.commands_dir)?;

        if self.json {
            print_json(&manifest, false)?;
        } else {
            let rows = manifest
                .iter()
                .map(|entry| {
                    [
                        entry.name.clone(),
                        entry.section.to_string(),
                        entry.title.clone(),
                        entry.authors.iter().join(", "),
                    ]
                })
                .collect::<Vec<_>>();
            print_table(["Name", "Section", "Title", "Authors"], &rows);
        }
        Ok(ExitCode::SUCCESS)
    }
}
