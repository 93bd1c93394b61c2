//! Extraction and merge engine.
//!
//! ## Module Structure
//!
//! - `table`: entry and table types shared by every stage
//! - `codec`: `.strings` text format and UTF-16 file I/O
//! - `extractor`: localisation macro extraction from source text
//! - `merge`: merge policies combining existing and extracted tables
//! - `scan`: input file enumeration
//! - `exporter`: external export of interface definition strings
//! - `sync`: one complete run tying the stages together

pub mod codec;
pub mod exporter;
pub mod extractor;
pub mod merge;
pub mod scan;
pub mod sync;
pub mod table;

pub use merge::{ChangeCounts, MergePolicy, MergeResult, merge};
pub use sync::{SourceReport, SyncOptions, SyncReport, TableReport, run_sync};
pub use table::{
    DEFAULT_TABLE_NAME, LocalisationEntry, LocalisationTable, TableSet, is_valid_table_name,
};
