//! External export of strings embedded in interface definition files.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{
    core::{codec::read_table, table::LocalisationTable},
    error::{LocError, Result},
};

/// Produces a `.strings` file from an interface definition file.
pub trait UiExporter {
    /// Write the strings of `interface` to `destination`.
    fn export(&self, interface: &Path, destination: &Path) -> Result<()>;
}

/// Runs `<program> --export-strings-file <destination> <interface>`,
/// the `ibtool` calling convention.
#[derive(Debug, Clone)]
pub struct CommandExporter {
    program: String,
}

impl CommandExporter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl UiExporter for CommandExporter {
    fn export(&self, interface: &Path, destination: &Path) -> Result<()> {
        let output = Command::new(&self.program)
            .arg("--export-strings-file")
            .arg(destination)
            .arg(interface)
            .output()
            .map_err(|source| LocError::ExporterSpawn {
                program: self.program.clone(),
                path: interface.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(LocError::ExporterFailed {
                program: self.program.clone(),
                path: interface.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !destination.is_file() {
            return Err(LocError::ExporterNoOutput {
                program: self.program.clone(),
                path: interface.to_path_buf(),
            });
        }

        Ok(())
    }
}

/// Export `interface` into `scratch_dir`, load the result and delete the
/// intermediate file.
pub fn export_interface_strings(
    exporter: &dyn UiExporter,
    interface: &Path,
    scratch_dir: &Path,
) -> Result<LocalisationTable> {
    let destination = intermediate_path(interface, scratch_dir);
    exporter.export(interface, &destination)?;

    let table = read_table(&destination);
    // The intermediate file is removed even when it failed to parse.
    if destination.exists() {
        fs::remove_file(&destination).map_err(|e| LocError::io(&destination, e))?;
    }
    table
}

fn intermediate_path(interface: &Path, scratch_dir: &Path) -> PathBuf {
    let stem = interface
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    scratch_dir.join(format!("UI_{}.strings", stem))
}
