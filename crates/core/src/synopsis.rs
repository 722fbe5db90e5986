//! Extraction of one-line command descriptions from the per-command doc
//! sources. Each command doc carries a synopsis line of the form
//! `<name> - <description>`, and that line is the single source of truth
//! for the description shown in the man page manifest.

use crate::error::ManifestError;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Separator between the command name and its description on the synopsis
/// line
const SEPARATOR: &str = " - ";

/// Get the description for a command by scanning its doc file for the
/// synopsis line. The first line starting with `<name> - ` wins and the
/// rest of the file is never read. A doc with no such line (or with a
/// blank description after the separator) is malformed, and malformed
/// sources fail the whole build rather than producing an incomplete man
/// page.
pub fn extract(path: &Path, name: &str) -> Result<String, ManifestError> {
    let file = File::open(path).map_err(|source| ManifestError::Io {
        path: path.to_owned(),
        source,
    })?;
    let prefix = format!("{name}{SEPARATOR}");

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| ManifestError::Io {
            path: path.to_owned(),
            source,
        })?;
        if let Some(description) = line.strip_prefix(&prefix) {
            let description = description.trim();
            if description.is_empty() {
                // First match wins, even when it's unusable
                break;
            }
            return Ok(description.to_owned());
        }
    }

    Err(ManifestError::MissingDescription {
        file: base_name(path),
    })
}

/// The file's base name, for error messages
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shoaldoc_util::{TempDir, assert_err, temp_dir};
    use std::fs;

    /// Write a doc for the `grill` command and extract its description
    fn extract_grill(
        temp_dir: &TempDir,
        content: &str,
    ) -> Result<String, ManifestError> {
        let path = temp_dir.join("grill.rst");
        fs::write(&path, content).unwrap();
        extract(&path, "grill")
    }

    #[rstest]
    #[case::simple("grill - cook things over fire\n", "cook things over fire")]
    #[case::trimmed("grill -   cook things over fire  \n", "cook things over fire")]
    #[case::not_first_line(
        "Synopsis\n========\n\ngrill - cook things over fire\n",
        "cook things over fire"
    )]
    #[case::first_match_wins(
        "grill - cook things over fire\ngrill - incinerate things\n",
        "cook things over fire"
    )]
    #[case::description_keeps_separator(
        "grill - cook - slowly\n",
        "cook - slowly"
    )]
    fn test_extract(
        temp_dir: TempDir,
        #[case] content: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(extract_grill(&temp_dir, content).unwrap(), expected);
    }

    /// Repeated extraction from the same content gives the same answer
    #[rstest]
    fn test_extract_deterministic(temp_dir: TempDir) {
        let path = temp_dir.join("grill.rst");
        fs::write(&path, "grill - cook things\ngrill - burn things\n")
            .unwrap();
        assert_eq!(
            extract(&path, "grill").unwrap(),
            extract(&path, "grill").unwrap()
        );
    }

    #[rstest]
    #[case::no_synopsis("Some heading\n====\n\nJust prose.\n")]
    #[case::wrong_name("grille - cook things over fire\n")]
    #[case::indented("  grill - cook things over fire\n")]
    #[case::missing_separator("grill-cook things over fire\n")]
    #[case::blank_description("grill - \n")]
    fn test_extract_missing(temp_dir: TempDir, #[case] content: &str) {
        assert_err!(
            extract_grill(&temp_dir, content),
            "No description in file grill.rst"
        );
    }

    /// An unreadable doc is an IO error naming the path, not a missing
    /// description
    #[rstest]
    fn test_extract_unreadable(temp_dir: TempDir) {
        assert_err!(
            extract(&temp_dir.join("nope.rst"), "nope"),
            "Error reading"
        );
    }
}
