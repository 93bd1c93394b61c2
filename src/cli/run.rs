use anyhow::{Result, bail};
use colored::Colorize;

use super::args::Arguments;
use crate::{
    config::load_config,
    core::{SyncOptions, SyncReport, exporter::CommandExporter, run_sync},
};

/// Load configuration and run one extraction and merge pass.
///
/// Fails before touching the filesystem when the input directory is
/// missing or the config file is invalid.
pub fn run(args: &Arguments) -> Result<SyncReport> {
    if !args.input.is_dir() {
        bail!(
            "Input directory '{}' does not exist or is not a directory.",
            args.input.display()
        );
    }
    if args.output.exists() && !args.output.is_dir() {
        bail!("Output path '{}' is not a directory.", args.output.display());
    }

    let loaded = load_config(&args.input)?;
    if args.verbose
        && let Some(path) = &loaded.path
    {
        eprintln!("{} {}", "config:".bold().cyan(), path.display());
    }

    let options = SyncOptions {
        input_dir: args.input.clone(),
        output_dir: args.output.clone(),
        recursive: args.recursive,
        policy: args.merge,
        dry_run: args.dry_run,
        verbose: args.verbose,
    };
    let exporter = CommandExporter::new(&loaded.config.exporter);

    Ok(run_sync(&options, &loaded.config, &exporter)?)
}
