use std::collections::BTreeMap;

/// Name of the table that macros without an explicit table argument write to.
pub const DEFAULT_TABLE_NAME: &str = "Localizable";

/// Whether `name` can be the base name of a `.strings` file placed directly
/// in the output directory.
///
/// Rejects empty names, path separators and names starting with `.`, which
/// covers `..` and hidden files.
pub fn is_valid_table_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\', '\0'])
}

/// Translatable text and its developer comment for a single key.
///
/// The key itself is stored as the map key in [`LocalisationTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalisationEntry {
    /// Text shown to the user. Seeded with the key until a translator edits it.
    pub value: String,
    /// Developer context for translators. Also the only change signal during merges.
    pub comment: String,
}

impl LocalisationEntry {
    pub fn new(value: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            comment: comment.into(),
        }
    }

    /// Entry for a key that has just been discovered in source code.
    pub fn untranslated(key: &str, comment: impl Into<String>) -> Self {
        Self::new(key, comment)
    }
}

/// Key to entry mapping for one `.strings` file.
///
/// Backed by a `BTreeMap` so iteration is always in ordinal key order,
/// which is the order entries are written to disk.
pub type LocalisationTable = BTreeMap<String, LocalisationEntry>;

/// Table name to table mapping accumulated over a run.
pub type TableSet = BTreeMap<String, LocalisationTable>;
