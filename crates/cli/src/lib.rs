#![forbid(unsafe_code)]
#![deny(clippy::all)]

//! Command line interface for shoaldoc.
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! `shoaldoc` crate version. If you choose to depend directly on this crate,
//! you do so at your own risk of breakage.

mod commands;
mod util;

use crate::commands::{
    check::CheckCommand, config::ConfigCommand, generate::GenerateCommand,
    manifest::ManifestCommand, version::VersionCommand,
};
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

const COMMAND_NAME: &str = "shoaldoc";

#[derive(Debug, Parser)]
#[clap(
    author,
    version,
    about,
    name = COMMAND_NAME,
    long_about = "Derive the documentation build metadata for the shoal shell"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,
    /// Subcommand to execute
    #[command(subcommand)]
    pub subcommand: CliCommand,
}

impl Args {
    /// Alias for [clap::Parser::parse]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Arguments that are available to all subcommands
#[derive(Debug, Parser)]
pub struct GlobalArgs {
    /// Build config file. If omitted, check $SHOALDOC_CONFIG, then
    /// shoaldoc.yml in the working directory, then fall back to the
    /// defaults
    #[clap(long, short)]
    pub config: Option<PathBuf>,
}

/// A CLI subcommand
#[derive(Clone, Debug, clap::Subcommand)]
pub enum CliCommand {
    Check(CheckCommand),
    Config(ConfigCommand),
    Generate(GenerateCommand),
    Manifest(ManifestCommand),
    Version(VersionCommand),
}

impl CliCommand {
    /// Execute this CLI subcommand
    pub fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode> {
        match self {
            Self::Check(command) => command.execute(global),
            Self::Config(command) => command.execute(global),
            Self::Generate(command) => command.execute(global),
            Self::Manifest(command) => command.execute(global),
            Self::Version(command) => command.execute(global),
        }
    }
}

/// An executable subcommand. This trait isn't strictly necessary because we
/// do static dispatch via the command enum, but it's helpful to enforce a
/// consistent interface for each subcommand.
trait Subcommand {
    /// Execute the subcommand
    fn execute(self, global: GlobalArgs) -> anyhow::Result<ExitCode>;
}
