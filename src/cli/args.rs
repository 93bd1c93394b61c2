//! CLI argument definitions using clap.
//!
//! The merge policy accepts both long names (`--merge full-merge`) and the
//! single-letter forms (`-mi`, `-mo`, `-mb`, `-mf`).

use std::path::PathBuf;

use clap::Parser;

use crate::core::MergePolicy;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Base directory to search for files with localisable text
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output directory for the generated .strings files
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Search subdirectories of the input directory
    #[arg(short, long)]
    pub recursive: bool,

    /// How extracted strings are merged with existing .strings files
    #[arg(short, long, value_enum, default_value_t = MergePolicy::InsertOnly)]
    pub merge: MergePolicy,

    /// Report the changes without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
