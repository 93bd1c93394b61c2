//! Lochelper - localisation string extraction for Xcode projects
//!
//! Lochelper scans Objective-C sources for the `NSLocalizedString` family of
//! macros and exports the strings of `.xib`/`.storyboard` files, then merges
//! the results into existing `.strings` tables using a selectable policy.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Codec, extractor, merge engine and the sync run
//! - `error`: Error types for runs that abort

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
