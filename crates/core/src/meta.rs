//! Assembly of the complete metadata document handed to the documentation
//! renderer. This replaces a pile of ambient module state with one value:
//! derive everything up front, then hand the immutable result over.

use crate::{
    config::BuildConfig,
    error::MetaError,
    manifest::{self, ManifestEntry},
    version,
};
use serde::Serialize;
use shoaldoc_util::ResultTraced;
use tracing::info;

/// Everything the renderer needs from us: the declarative config tables,
/// the resolved release version, and the ordered man page manifest. Derived
/// once at build start; immutable from then on.
#[derive(Debug, Serialize)]
pub struct BuildMeta {
    /// The declarative tables, passed through unmodified
    pub config: BuildConfig,
    /// The full version, including alpha/beta/rc tags
    pub release: String,
    /// The short X.Y version
    pub version: String,
    /// Ordered manifest: fixed entries first, then discovered commands
    pub man_pages: Vec<ManifestEntry>,
}

impl BuildMeta {
    /// Derive the full metadata document from the given config: resolve the
    /// release version, then assemble the man page manifest. Both steps are
    /// all-or-nothing; the first failure aborts the build, because
    /// incomplete documentation metadata must never reach the renderer.
    pub fn load(config: BuildConfig) -> Result<Self, MetaError> {
        let version = version::resolve(&config.version_tool).traced()?;
        let man_pages =
            manifest::assemble(&config.man_pages, &config.commands_dir)
                .traced()?;
        info!(
            release = version.full,
            man_pages = man_pages.len(),
            "Derived documentation build metadata"
        );
        Ok(Self {
            release: version.full,
            version: version.short,
            man_pages,
            config,
        })
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;
    use crate::error::ManifestError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shoaldoc_util::{TempDir, stub_program, temp_dir};
    use std::fs;

    /// Config pointing at a stub version tool and a temp commands dir
    fn config(temp_dir: &TempDir, tool_body: &str) -> BuildConfig {
        let tool = stub_program(&**temp_dir, "shoal_indent", tool_body);
        let commands_dir = temp_dir.join("cmds");
        fs::create_dir(&commands_dir).unwrap();
        BuildConfig {
            version_tool: tool.to_str().unwrap().to_owned(),
            commands_dir,
            ..BuildConfig::default()
        }
    }

    #[rstest]
    fn test_load(temp_dir: TempDir) {
        let config =
            config(&temp_dir, "echo 'shoal_indent, version 3.2.0'");
        fs::write(
            config.commands_dir.join("grill.rst"),
            "grill - cook things over fire\n",
        )
        .unwrap();

        let meta = BuildMeta::load(config).unwrap();
        assert_eq!(meta.release, "3.2.0");
        assert_eq!(meta.version, "3.2");
        // All fixed entries, then the one discovered command
        assert_eq!(meta.man_pages.len(), 6);
        let command = &meta.man_pages[5];
        assert_eq!(command.name, "grill");
        assert_eq!(command.title, "cook things over fire");
        assert_eq!(command.authors, Vec::<String>::new());
    }

    /// The serialized document carries the derived values and the config
    /// tables under stable keys
    #[rstest]
    fn test_serialize(temp_dir: TempDir) {
        let config = config(&temp_dir, "echo 'version 3.2.0'");
        let meta = BuildMeta::load(config).unwrap();
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["release"], "3.2.0");
        assert_eq!(json["version"], "3.2");
        assert_eq!(json["config"]["project"], "shoal-shell");
        assert_eq!(json["man_pages"][0]["name"], "shoal-doc");
    }

    /// A broken version tool aborts the build before any file is scanned
    #[rstest]
    fn test_version_failure_aborts(temp_dir: TempDir) {
        let config = config(&temp_dir, "exit 7");
        assert!(matches!(
            BuildMeta::load(config),
            Err(MetaError::Version(_))
        ));
    }

    /// A malformed command doc aborts the build even when the version
    /// resolved fine
    #[rstest]
    fn test_manifest_failure_aborts(temp_dir: TempDir) {
        let config = config(&temp_dir, "echo 'version 3.2.0'");
        fs::write(config.commands_dir.join("bad.rst"), "no synopsis\n")
            .unwrap();
        assert!(matches!(
            BuildMeta::load(config),
            Err(MetaError::Manifest(ManifestError::MissingDescription {
                file
            })) if file == "bad.rst"
        ));
    }
}
