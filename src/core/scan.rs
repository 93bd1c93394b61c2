//! Enumeration of the files a run should process.

use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

/// How a candidate file is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputFileKind {
    /// Source text scanned for localisation macros.
    Source,
    /// Interface definition exported through the external exporter.
    Interface,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub kind: InputFileKind,
    pub path: PathBuf,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Candidate files sorted by path.
    pub files: Vec<InputFile>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

/// Extension rules and ignore patterns used while scanning.
#[derive(Debug, Clone)]
pub struct FileFilter {
    source_extensions: Vec<String>,
    interface_extensions: Vec<String>,
    ignores: Vec<Pattern>,
}

impl FileFilter {
    pub fn from_config(config: &Config) -> Self {
        Self {
            source_extensions: config.source_extensions.clone(),
            interface_extensions: config.interface_extensions.clone(),
            ignores: config.ignore_patterns(),
        }
    }

    /// Classify a file by extension. `None` means the file is not processed.
    pub fn classify(&self, path: &Path) -> Option<InputFileKind> {
        let ext = path.extension()?.to_str()?;
        if self.source_extensions.iter().any(|e| e == ext) {
            Some(InputFileKind::Source)
        } else if self.interface_extensions.iter().any(|e| e == ext) {
            Some(InputFileKind::Interface)
        } else {
            None
        }
    }

    fn is_ignored(&self, relative: &Path) -> bool {
        self.ignores.iter().any(|p| p.matches_path(relative))
    }
}

/// Collect the candidate files under `input_dir`.
///
/// Without `recursive` only the direct children of `input_dir` are considered.
/// Symbolic links are followed, so linked files and directories are scanned too.
pub fn scan_files(
    input_dir: &Path,
    recursive: bool,
    filter: &FileFilter,
    verbose: bool,
) -> ScanResult {
    let mut result = ScanResult::default();
    let max_depth = if recursive { usize::MAX } else { 1 };

    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(max_depth)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} Failed to read directory entry: {}",
                        "warning:".bold().yellow(),
                        e
                    );
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(input_dir).unwrap_or(path);
        if filter.is_ignored(relative) {
            continue;
        }

        if let Some(kind) = filter.classify(path) {
            result.files.push(InputFile {
                kind,
                path: path.to_path_buf(),
            });
        }
    }

    result.files.sort_by(|a, b| a.path.cmp(&b.path));
    result
}
