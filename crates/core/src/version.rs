//! Release version resolution. The docs don't trust any checked-in version
//! file to be in the right place; they ask the shell's formatter instead,
//! which is guaranteed to be on PATH because the docs highlighter needs it
//! anyway.

use crate::error::VersionError;
use serde::Serialize;
use std::process::Command;
use tracing::debug;

/// A release of the shell, as reported by the external version tool.
/// Derived once per build and immutable thereafter.
#[derive(Clone, Debug, derive_more::Display, Eq, PartialEq, Serialize)]
#[display("{full}")]
pub struct VersionString {
    /// The full version, including any alpha/beta/rc tags
    pub full: String,
    /// The short X.Y version: the full version with its last `.`-separated
    /// segment removed
    pub short: String,
}

impl VersionString {
    /// Parse a version out of the tool's output. The version is the last
    /// whitespace-separated token of the trimmed output; the short form
    /// drops the final `.`-separated segment (`3.2.0` becomes `3.2`). A
    /// token with no dot is its own short form. Blank output has no version
    /// to offer, so it yields `None`.
    fn parse(output: &str) -> Option<Self> {
        let full = output.split_whitespace().next_back()?;
        let short = full.rsplit_once('.').map_or(full, |(rest, _)| rest);
        Some(Self {
            full: full.into(),
            short: short.into(),
        })
    }
}

/// Ask the external tool for its version by running `<tool> --version`.
/// stdout and stderr are combined before parsing, because some tools report
/// their version on stderr.
///
/// This blocks on the subprocess. Call it once per build and keep the
/// result (see [BuildMeta](crate::meta::BuildMeta)); docs emitted with a
/// stale or missing version are considered invalid output, which is why
/// every failure here is fatal.
pub fn resolve(tool: &str) -> Result<VersionString, VersionError> {
    let output = Command::new(tool).arg("--version").output().map_err(
        |source| VersionError::Launch {
            tool: tool.into(),
            source,
        },
    )?;

    // Merge the streams the way a terminal would show them
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    if !output.status.success() {
        return Err(VersionError::Failed {
            tool: tool.into(),
            status: output.status,
            output: text,
        });
    }

    let version = VersionString::parse(&text).ok_or_else(|| {
        VersionError::Empty { tool: tool.into() }
    })?;
    debug!(tool, %version, "Resolved release version");
    Ok(version)
}
