//! Reading and writing `.strings` tables.
//!
//! - `strings`: the block text format (decode/encode)
//! - `utf16`: the UTF-16 transfer encoding Xcode expects on disk

pub mod strings;
pub mod utf16;

use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;

pub use strings::{DecodeError, DecodeErrorKind, EncodeError, check_entry, decode, encode};
pub use utf16::{Utf16Error, decode_utf16, encode_utf16};

use crate::{
    core::table::LocalisationTable,
    error::{LocError, Result},
};

/// Load a `.strings` file from disk.
pub fn read_table(path: &Path) -> Result<LocalisationTable> {
    let bytes = fs::read(path).map_err(|e| LocError::io(path, e))?;
    let text = decode_utf16(&bytes).map_err(|source| LocError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&text).map_err(|source| LocError::MalformedTable {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a `.strings` file, treating a missing file as an empty table.
pub fn read_existing_table(path: &Path) -> Result<LocalisationTable> {
    if path.exists() {
        read_table(path)
    } else {
        Ok(LocalisationTable::new())
    }
}

/// Write a table to disk, replacing any existing file.
///
/// The content goes to a temporary file in the destination directory first
/// and is renamed over the target, so readers never see a half-written file.
pub fn write_table(path: &Path, table: &LocalisationTable) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let bytes = encode_utf16(&encode(table));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| LocError::io(dir, e))?;
    tmp.write_all(&bytes).map_err(|e| LocError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| LocError::io(path, e.error))?;
    Ok(())
}
