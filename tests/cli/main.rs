use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use lochelper::core::{
    LocalisationEntry, LocalisationTable,
    codec::{read_table, write_table},
};
use tempfile::TempDir;

mod sync;

const BIN_NAME: &str = "lochelper";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir_all(project_dir.join("src"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a `.strings` file in the on-disk UTF-16 format.
    pub fn write_strings(&self, path: &str, entries: &[(&str, &str, &str)]) -> Result<()> {
        let file_path = self.project_dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_table(&file_path, &table(entries))?;
        Ok(())
    }

    pub fn read_strings(&self, path: &str) -> Result<LocalisationTable> {
        let file_path = self.project_dir.join(path);
        read_table(&file_path).with_context(|| format!("Failed to read {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for stable output
        cmd
    }

    /// `lochelper -i src -o out` plus `extra` arguments.
    pub fn sync_command(&self, extra: &[&str]) -> Command {
        let mut cmd = self.command();
        cmd.args(["-i", "src", "-o", "out"]).args(extra);
        cmd
    }
}

pub fn table(entries: &[(&str, &str, &str)]) -> LocalisationTable {
    entries
        .iter()
        .map(|(k, v, c)| (k.to_string(), LocalisationEntry::new(*v, *c)))
        .collect()
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
