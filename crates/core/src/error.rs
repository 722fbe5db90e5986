//! Error types for metadata derivation. Every error in this crate is fatal:
//! the build either produces a complete metadata document or stops at the
//! first defect. Nothing here is caught and recovered internally.

use std::{io, path::PathBuf, process::ExitStatus};
use thiserror::Error;

/// Error resolving the release version from the external tool
#[derive(Debug, Error)]
pub enum VersionError {
    /// The tool couldn't be launched, most likely because it isn't on PATH
    #[error("Error invoking `{tool} --version`")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The tool ran but reported failure. Its combined output is attached
    /// so the user can see what went wrong.
    #[error("`{tool} --version` exited with {status}:\n{output}")]
    Failed {
        tool: String,
        status: ExitStatus,
        output: String,
    },

    /// The tool succeeded but printed nothing to take a version from
    #[error("`{tool} --version` printed no version token")]
    Empty { tool: String },
}

/// Error assembling the man page manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A command doc has no synopsis line, so there's no description to put
    /// in the manifest
    #[error("No description in file {file}")]
    MissingDescription { file: String },

    /// Error listing the commands directory or reading a command doc
    #[error("Error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Any error that can occur while deriving the full metadata document
#[derive(Debug, Error)]
pub enum MetaError {
    #[error(transparent)]
    Version(#[from] VersionError),
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}
