//! Assembly of the man page manifest: the fixed entries declared in the
//! build config, followed by one discovered entry per command doc.

use crate::{error::ManifestError, synopsis};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

/// One man page for the renderer to emit. Field order matches the
/// renderer's `(document, name, title, authors, section)` contract.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ManifestEntry {
    /// Source document ID: the file's base name with the extension
    /// stripped
    pub document: String,
    /// Output name of the man page
    pub name: String,
    /// Human title. For command pages this is the synopsis description.
    pub title: String,
    /// Authors. Discovered command pages intentionally leave this empty;
    /// fixed entries carry the real author list.
    pub authors: Vec<String>,
    /// Manual section number
    pub section: u8,
}

impl ManifestEntry {
    /// Entry for a discovered command doc
    fn command(name: String, description: String) -> Self {
        Self {
            document: name.clone(),
            name,
            title: description,
            authors: Vec::new(),
            section: 1,
        }
    }
}

/// Build the full ordered manifest: every fixed entry in declaration
/// order, then one entry per file in the commands directory, ordered by
/// file name. Any command doc without a synopsis line aborts the whole
/// assembly; a partial manifest is never returned.
pub fn assemble(
    fixed: &[ManifestEntry],
    commands_dir: &Path,
) -> Result<Vec<ManifestEntry>, ManifestError> {
    let mut manifest = fixed.to_vec();
    for path in list_command_docs(commands_dir)? {
        let name = doc_name(&path);
        let description = synopsis::extract(&path, &name)?;
        manifest.push(ManifestEntry::command(name, description));
    }
    debug!(
        total = manifest.len(),
        fixed = fixed.len(),
        "Assembled man page manifest"
    );
    Ok(manifest)
}

/// List the command doc files, sorted by file name so the manifest order is
/// reproducible regardless of filesystem iteration order. Dotfiles are
/// excluded; there is deliberately no extension filter, every other entry
/// in the directory is a command doc. A directory with no command docs (or
/// no directory at all) yields no discovered entries.
fn list_command_docs(dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let io_error = |source| ManifestError::Io {
        path: dir.to_owned(),
        source,
    };
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(Vec::new());
        }
        Err(error) => return Err(io_error(error)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(io_error)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Derive a command name from its doc file: base name, extension stripped
fn doc_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
