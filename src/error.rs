//! Error types shared by the codec, extractor and sync run.
//!
//! Every variant is fatal to a run: nothing is written to the output
//! directory once one of these has been produced.

use std::{io, path::PathBuf, process::ExitStatus};

use crate::core::codec::{DecodeError, EncodeError, Utf16Error};

pub type Result<T, E = LocError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum LocError {
    /// The same key was extracted twice for one table with different comments.
    #[error(
        "Key \"{key}\" in table \"{table}\" exists with different comments (\"{existing}\" and \"{incoming}\")"
    )]
    Conflict {
        table: String,
        key: String,
        existing: String,
        incoming: String,
    },

    /// A source table would be written to the same file as the interface table.
    #[error("Table \"{table}\" collides with the interface strings table")]
    TableNameCollision { table: String },

    /// A table name that would not produce a file directly inside the output directory.
    #[error("Table name \"{table}\" cannot be used as a strings file name")]
    InvalidTableName { table: String },

    #[error("Key \"{key}\" in table \"{table}\" cannot be written: {source}")]
    Unencodable {
        table: String,
        key: String,
        #[source]
        source: EncodeError,
    },

    #[error("Failed to run interface exporter '{program}' for {}: {source}", path.display())]
    ExporterSpawn {
        program: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Interface exporter '{program}' failed for {} ({status}): {stderr}", path.display())]
    ExporterFailed {
        program: String,
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Interface exporter '{program}' produced no strings file for {}", path.display())]
    ExporterNoOutput { program: String, path: PathBuf },

    #[error("Malformed strings file {}: {source}", path.display())]
    MalformedTable {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("Strings file {} is not valid UTF-16: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: Utf16Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocError::Io {
            path: path.into(),
            source,
        }
    }
}
