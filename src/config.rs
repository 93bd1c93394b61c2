use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::table::{DEFAULT_TABLE_NAME, is_valid_table_name};

pub const CONFIG_FILE_NAME: &str = ".lochelperrc.json";

/// Base name of the aggregate interface strings file.
pub const UI_TABLE_NAME: &str = "UI_Autogenerated";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default = "default_interface_extensions")]
    pub interface_extensions: Vec<String>,
    #[serde(default = "default_table")]
    pub default_table: String,
    #[serde(default = "default_ui_table")]
    pub ui_table: String,
    #[serde(default = "default_exporter")]
    pub exporter: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_extensions() -> Vec<String> {
    vec!["m".to_string()]
}

fn default_interface_extensions() -> Vec<String> {
    ["xib", "storyboard"].map(String::from).to_vec()
}

fn default_table() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_ui_table() -> String {
    UI_TABLE_NAME.to_string()
}

fn default_exporter() -> String {
    "ibtool".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            interface_extensions: default_interface_extensions(),
            default_table: default_table(),
            ui_table: default_ui_table(),
            exporter: default_exporter(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if an `ignores` glob is invalid or a table name is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.default_table.trim().is_empty() {
            anyhow::bail!("'defaultTable' must not be empty");
        }
        if self.ui_table.trim().is_empty() {
            anyhow::bail!("'uiTable' must not be empty");
        }
        for (field, name) in [("defaultTable", &self.default_table), ("uiTable", &self.ui_table)] {
            if !is_valid_table_name(name) {
                anyhow::bail!("'{}' is not a valid table name: \"{}\"", field, name);
            }
        }
        if self.exporter.trim().is_empty() {
            anyhow::bail!("'exporter' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
