#![allow(unused)]

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use shoaldoc_util::{TempDir, temp_dir};
use std::{fs, path::PathBuf};

/// A temporary docs tree: a commands directory plus a config file pointing
/// at it. Tests add command docs (and a stub version tool) as needed.
pub struct DocsTree {
    dir: TempDir,
}

impl DocsTree {
    pub fn new() -> Self {
        let dir = temp_dir();
        fs::create_dir(dir.join("cmds")).unwrap();
        let tree = Self { dir };
        tree.write_config(None);
        tree
    }

    /// Get a command to run shoaldoc against this tree
    pub fn command(&self) -> Command {
        let mut command = bare_command();
        command.args(["--config", self.config_path().to_str().unwrap()]);
        command
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("shoaldoc.yml")
    }

    /// Add a command doc with a valid synopsis line
    pub fn add_command(&self, name: &str, description: &str) {
        self.add_raw(
            &format!("{name}.rst"),
            &format!("{name} - {description}\n"),
        );
    }

    /// Add a command doc with arbitrary content
    pub fn add_raw(&self, file: &str, content: &str) {
        fs::write(self.dir.join("cmds").join(file), content).unwrap();
    }

    /// Install a stub version tool and point the config at it
    #[cfg(unix)]
    pub fn stub_version_tool(&self, body: &str) {
        let tool =
            shoaldoc_util::stub_program(&*self.dir, "shoal_indent", body);
        self.write_config(Some(&tool));
    }

    fn write_config(&self, tool: Option<&std::path::Path>) {
        let mut config =
            format!("commands_dir: {}\n", self.dir.join("cmds").display());
        if let Some(tool) = tool {
            config.push_str(&format!("version_tool: {}\n", tool.display()));
        }
        fs::write(self.config_path(), config).unwrap();
    }
}

/// Get a command to run shoaldoc with no implicit arguments
pub fn bare_command() -> Command {
    cargo_bin_cmd!("shoaldoc_cli")
}
