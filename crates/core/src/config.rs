//! Declarative configuration for the documentation build. Everything in
//! here is data: the values are handed through to the renderer unmodified.
//! The derived pieces (release version, command descriptions) live in
//! [meta](crate::meta).
//!
//! The config is constructed once at build start, either from defaults or
//! from an optional YAML file, and passed by reference to whatever consumes
//! it. Nothing mutates it after load.

use crate::manifest::ManifestEntry;
use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shoaldoc_util::ResultTracedAnyhow;
use std::{env, fs, path::PathBuf};
use tracing::info;

const PATH_ENV_VAR: &str = "SHOALDOC_CONFIG";
const FILE: &str = "shoaldoc.yml";

/// Build configuration for the shoal documentation. The defaults describe
/// the real docs tree; the YAML file exists so CI and local checkouts can
/// repoint paths without patching the tool.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project name shown across all output formats
    pub project: String,
    /// Copyright line for rendered output
    pub copyright: String,
    /// Author credited on fixed documents
    pub author: String,
    /// External program asked for the release version. It's guaranteed to
    /// be on PATH because the docs highlighter needs it anyway.
    pub version_tool: String,
    /// Directory of per-command doc sources, relative to the docs root
    pub commands_dir: PathBuf,
    /// The master toctree document
    pub master_doc: String,
    /// The suffix of source filenames
    pub source_suffix: String,
    /// The default language to assume for code samples
    pub highlight_language: String,
    /// Paths that contain templates, relative to the docs root
    pub templates_path: Vec<String>,
    /// Patterns to ignore when looking for source files
    pub exclude_patterns: Vec<String>,
    /// Man pages declared up front. These come ahead of the discovered
    /// command pages and, unlike them, carry a real author list.
    pub man_pages: Vec<ManifestEntry>,
    /// Options for HTML output
    pub html: HtmlConfig,
    /// Grouping of the document tree into LaTeX files
    pub latex_documents: Vec<LatexDocument>,
    /// Grouping of the document tree into Texinfo files
    pub texinfo_documents: Vec<TexinfoDocument>,
    /// Options for Epub output
    pub epub: EpubConfig,
    /// Disabled so double dashes in samples don't become em-dashes
    pub smartquotes: bool,
}

impl BuildConfig {
    /// Path to the build config file: `$SHOALDOC_CONFIG` if set, otherwise
    /// `shoaldoc.yml` in the working directory (the docs root)
    pub fn path() -> PathBuf {
        env::var(PATH_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| FILE.into())
    }

    /// Load configuration from the given file, or from [Self::path] if no
    /// override is given. A missing file just means the defaults. This only
    /// returns an error if the file could be read, but deserialization
    /// failed. This is *not* async because it's only run during startup,
    /// when all operations are synchronous.
    pub fn load(override_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let path = override_path.unwrap_or_else(Self::path);
        if !path.is_file() {
            info!(?path, "No config file present, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading configuration file");
        (|| {
            let content = fs::read_to_string(&path)?;
            let config = serde_yaml::from_str::<Self>(&content)?;
            Ok::<_, anyhow::Error>(config)
        })()
        .context(format!("Error loading configuration from {path:?}"))
        .traced()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        let author = "shoal-shell developers".to_owned();
        Self {
            project: "shoal-shell".into(),
            copyright: "2026, shoal-shell developers".into(),
            version_tool: "shoal_indent".into(),
            commands_dir: "cmds".into(),
            master_doc: "index".into(),
            source_suffix: ".rst".into(),
            highlight_language: "shoal-docs-samples".into(),
            templates_path: vec!["_templates".into()],
            exclude_patterns: Vec::new(),
            man_pages: fixed_man_pages(&author),
            html: HtmlConfig::default(),
            latex_documents: vec![LatexDocument {
                document: "index".into(),
                target: "shoal-shell.tex".into(),
                title: "shoal-shell Documentation".into(),
                author: author.clone(),
                class: "manual".into(),
            }],
            texinfo_documents: vec![TexinfoDocument {
                document: "index".into(),
                target: "shoal-shell".into(),
                title: "shoal-shell Documentation".into(),
                author: author.clone(),
                dir_entry: "shoal-shell".into(),
                description: "One line description of project.".into(),
                category: "Miscellaneous".into(),
            }],
            epub: EpubConfig::default(),
            smartquotes: false,
            author,
        }
    }
}

/// The man pages that aren't derived from command docs. Declaration order
/// here is output order.
fn fixed_man_pages(author: &str) -> Vec<ManifestEntry> {
    let page = |document: &str, name: &str, title: &str| ManifestEntry {
        document: document.into(),
        name: name.into(),
        title: title.into(),
        authors: vec![author.to_owned()],
        section: 1,
    };
    vec![
        page("index", "shoal-doc", "shoal-shell Documentation"),
        page("tutorial", "shoal-tutorial", "shoal-shell tutorial"),
        page("CHANGELOG", "shoal-changelog", "shoal-shell changelog"),
        page("completions", "shoal-completions", "Writing shoal completions"),
        page("faq", "shoal-faq", "shoal-shell faq"),
    ]
}

/// Options for HTML output, passed through to the renderer
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    /// Theme for HTML and HTML Help pages. If you change this you also
    /// need to update the @import at the top of the syntax stylesheet.
    pub theme: String,
    /// Paths that contain custom static files, relative to the docs root.
    /// They are copied after the builtin static files, so a file named
    /// `default.css` will overwrite the builtin `default.css`.
    pub static_path: Vec<String>,
    /// Custom sidebar templates, mapping document names to template names
    pub sidebars: IndexMap<String, Vec<String>>,
    /// Output file base name for the HTML help builder
    pub help_basename: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            theme: "nature".into(),
            static_path: vec!["_static".into()],
            sidebars: IndexMap::from_iter([(
                "**".to_owned(),
                vec![
                    "globaltoc.html".to_owned(),
                    "searchbox.html".to_owned(),
                    "localtoc.html".to_owned(),
                ],
            )]),
            help_basename: "shoal-shelldoc".into(),
        }
    }
}

/// One LaTeX file grouped out of the document tree
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LatexDocument {
    /// Source start document
    pub document: String,
    /// Target .tex file name
    pub target: String,
    pub title: String,
    pub author: String,
    /// Document class: howto, manual, or a custom class
    pub class: String,
}

/// One Texinfo file grouped out of the document tree
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TexinfoDocument {
    /// Source start document
    pub document: String,
    /// Target name
    pub target: String,
    pub title: String,
    pub author: String,
    /// Dir menu entry
    pub dir_entry: String,
    pub description: String,
    pub category: String,
}

/// Options for Epub output, passed through to the renderer
#[derive(Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpubConfig {
    /// Title of the epub. Defaults to the project name.
    pub title: Option<String>,
    /// Files that should not be packed into the epub
    pub exclude_files: Vec<String>,
}

impl Default for EpubConfig {
    fn default() -> Self {
        Self {
            title: None,
            exclude_files: vec!["search.html".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shoaldoc_util::{TempDir, assert_err, temp_dir};
    use std::fs;

    #[test]
    fn test_custom_config_path() {
        let _guard = env_lock::lock_env([(
            PATH_ENV_VAR,
            Some("/docs/shoaldoc.yml"),
        )]);
        assert_eq!(BuildConfig::path(), PathBuf::from("/docs/shoaldoc.yml"));
    }

    /// The fixed man pages head the manifest in declaration order
    #[test]
    fn test_default_man_pages() {
        let config = BuildConfig::default();
        let names = config
            .man_pages
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "shoal-doc",
                "shoal-tutorial",
                "shoal-changelog",
                "shoal-completions",
                "shoal-faq",
            ]
        );
        // Fixed entries all carry the real author list
        assert!(
            config
                .man_pages
                .iter()
                .all(|entry| entry.authors == vec![config.author.clone()])
        );
    }

    /// A partial YAML file overrides just the fields it names
    #[rstest]
    fn test_load_partial(temp_dir: TempDir) {
        let path = temp_dir.join("shoaldoc.yml");
        fs::write(
            &path,
            "project: reef-shell\nhtml:\n  theme: alabaster\n",
        )
        .unwrap();
        let config = BuildConfig::load(Some(path)).unwrap();
        assert_eq!(config.project, "reef-shell");
        assert_eq!(config.html.theme, "alabaster");
        // Everything else keeps its default
        assert_eq!(config.version_tool, "shoal_indent");
        assert_eq!(config.commands_dir, PathBuf::from("cmds"));
    }

    /// A missing file is fine, an unparseable one is not
    #[rstest]
    fn test_load_missing_file(temp_dir: TempDir) {
        let config = BuildConfig::load(Some(temp_dir.join("nope.yml")));
        assert_eq!(config.unwrap().project, "shoal-shell");
    }

    /// Typos shouldn't silently configure nothing
    #[rstest]
    fn test_load_unknown_field(temp_dir: TempDir) {
        let path = temp_dir.join("shoaldoc.yml");
        fs::write(&path, "projcet: reef-shell\n").unwrap();
        assert_err!(
            BuildConfig::load(Some(path)),
            "Error loading configuration"
        );
    }
}
