//! One extraction and merge run over an input directory.
//!
//! The run is all-or-nothing: every input file is processed and every
//! merge is computed in memory before the first output file is written.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::{
    config::Config,
    core::{
        codec::{check_entry, read_existing_table, write_table},
        exporter::{UiExporter, export_interface_strings},
        extractor::TableCollector,
        merge::{ChangeCounts, MergePolicy, MergeResult, merge},
        scan::{FileFilter, InputFileKind, scan_files},
        table::{LocalisationTable, is_valid_table_name},
    },
    error::{LocError, Result},
};

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub recursive: bool,
    pub policy: MergePolicy,
    /// Compute everything but leave the output directory untouched.
    pub dry_run: bool,
    pub verbose: bool,
}

/// Outcome for one output `.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    pub path: PathBuf,
    pub counts: ChangeCounts,
    /// Number of entries in the merged table.
    pub entry_count: usize,
}

/// Macro calls matched in one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub path: PathBuf,
    pub macro_calls: usize,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    /// Interface table first, then source tables in name order.
    pub tables: Vec<TableReport>,
    /// Source files in scan order.
    pub sources: Vec<SourceReport>,
    pub source_files: usize,
    pub interface_files: usize,
    pub macro_calls: usize,
    pub skipped_entries: usize,
    pub written: bool,
}

impl SyncReport {
    pub fn total(&self) -> ChangeCounts {
        let mut total = ChangeCounts::default();
        for table in &self.tables {
            total += table.counts;
        }
        total
    }
}

struct PlannedWrite {
    path: PathBuf,
    result: MergeResult,
}

/// Run extraction and merging for `options.input_dir`.
pub fn run_sync(
    options: &SyncOptions,
    config: &Config,
    exporter: &dyn UiExporter,
) -> Result<SyncReport> {
    let filter = FileFilter::from_config(config);
    let scan = scan_files(
        &options.input_dir,
        options.recursive,
        &filter,
        options.verbose,
    );

    let mut report = SyncReport {
        skipped_entries: scan.skipped_count,
        ..Default::default()
    };
    let mut collector = TableCollector::new(&config.default_table);
    let mut ui_table = LocalisationTable::new();
    let mut scratch: Option<TempDir> = None;

    for file in &scan.files {
        match file.kind {
            InputFileKind::Source => {
                let bytes = fs::read(&file.path).map_err(|e| LocError::io(&file.path, e))?;
                let text = String::from_utf8_lossy(&bytes);
                let macro_calls = collector.add_source(&text)?;
                report.macro_calls += macro_calls;
                report.source_files += 1;
                report.sources.push(SourceReport {
                    path: file.path.clone(),
                    macro_calls,
                });
            }
            InputFileKind::Interface => {
                let scratch_dir = match &scratch {
                    Some(dir) => dir.path().to_path_buf(),
                    None => {
                        let dir = TempDir::new()
                            .map_err(|e| LocError::io(std::env::temp_dir(), e))?;
                        let path = dir.path().to_path_buf();
                        scratch = Some(dir);
                        path
                    }
                };
                let generated = export_interface_strings(exporter, &file.path, &scratch_dir)?;
                ui_table = merge(&ui_table, &generated, MergePolicy::InsertOnly).table;
                report.interface_files += 1;
            }
        }
    }

    let tables = collector.into_tables();
    if tables.contains_key(&config.ui_table) {
        return Err(LocError::TableNameCollision {
            table: config.ui_table.clone(),
        });
    }
    if let Some(name) = tables.keys().find(|name| !is_valid_table_name(name)) {
        return Err(LocError::InvalidTableName {
            table: name.clone(),
        });
    }

    let mut planned = Vec::with_capacity(tables.len() + 1);
    planned.push(plan_table(
        &options.output_dir,
        &config.ui_table,
        &ui_table,
        options.policy,
    )?);
    for (name, table) in &tables {
        planned.push(plan_table(
            &options.output_dir,
            name,
            table,
            options.policy,
        )?);
    }

    if !options.dry_run {
        fs::create_dir_all(&options.output_dir)
            .map_err(|e| LocError::io(&options.output_dir, e))?;
        for write in &planned {
            write_table(&write.path, &write.result.table)?;
        }
        report.written = true;
    }

    report.tables = planned
        .into_iter()
        .map(|write| TableReport {
            entry_count: write.result.table.len(),
            counts: write.result.counts,
            path: write.path,
        })
        .collect();

    Ok(report)
}

/// Output path of the `.strings` file for `table_name`.
pub fn table_path(output_dir: &Path, table_name: &str) -> PathBuf {
    output_dir.join(format!("{}.strings", table_name))
}

fn plan_table(
    output_dir: &Path,
    table_name: &str,
    incoming: &LocalisationTable,
    policy: MergePolicy,
) -> Result<PlannedWrite> {
    let path = table_path(output_dir, table_name);
    let existing = read_existing_table(&path)?;
    let result = merge(&existing, incoming, policy);
    for (key, entry) in &result.table {
        check_entry(key, entry).map_err(|source| LocError::Unencodable {
            table: table_name.to_string(),
            key: key.clone(),
            source,
        })?;
    }
    Ok(PlannedWrite { path, result })
}
