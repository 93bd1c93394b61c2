//! Extraction of localisation keys from Objective-C source text.
//!
//! ## Module Structure
//!
//! - `rules`: the ordered macro shapes recognised in source files
//!
//! Every match of every rule is collected; a file may use several macro
//! shapes. Extracted keys accumulate in a [`TableCollector`] for the whole
//! run so that duplicate keys are checked across files, not only within one.

pub mod rules;


use std::{collections::btree_map::Entry, sync::LazyLock};

use regex::{Captures, Regex};

pub use rules::{EXTRACTION_RULES, ExtractionRule};

use crate::{
    core::table::{DEFAULT_TABLE_NAME, LocalisationEntry, TableSet},
    error::{LocError, Result},
};

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static ExtractionRule)>> = LazyLock::new(|| {
    EXTRACTION_RULES
        .iter()
        .map(|rule| (Regex::new(rule.pattern).unwrap(), rule))
        .collect()
});

/// One localisation macro invocation found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroCall<'t> {
    pub rule: &'static str,
    pub key: &'t str,
    /// `None` when the macro form has no table argument.
    pub table: Option<&'t str>,
    pub comment: &'t str,
    pub bundle: Option<&'t str>,
}

impl<'t> MacroCall<'t> {
    fn from_captures(rule: &'static ExtractionRule, caps: &Captures<'t>) -> Self {
        let group = |index: Option<usize>| index.and_then(|i| caps.get(i)).map(|m| m.as_str());
        MacroCall {
            rule: rule.name,
            key: group(Some(rule.key)).unwrap_or_default(),
            table: group(rule.table),
            comment: group(rule.comment).unwrap_or_default(),
            bundle: group(rule.bundle),
        }
    }
}

/// Find every macro invocation in `source`, rule by rule in priority order.
pub fn find_macro_calls(source: &str) -> Vec<MacroCall<'_>> {
    COMPILED_RULES
        .iter()
        .flat_map(|(regex, rule)| {
            regex
                .captures_iter(source)
                .map(move |caps| MacroCall::from_captures(*rule, &caps))
        })
        .collect()
}

/// Accumulates extracted keys per table over a run.
#[derive(Debug)]
pub struct TableCollector {
    default_table: String,
    tables: TableSet,
}

impl Default for TableCollector {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

impl TableCollector {
    pub fn new(default_table: impl Into<String>) -> Self {
        Self {
            default_table: default_table.into(),
            tables: TableSet::new(),
        }
    }

    /// Extract every macro call in `source` into the collected tables.
    ///
    /// Returns the number of macro calls found.
    pub fn add_source(&mut self, source: &str) -> Result<usize> {
        let calls = find_macro_calls(source);
        for call in &calls {
            self.insert(call)?;
        }
        Ok(calls.len())
    }

    /// Record a single call.
    ///
    /// A key seen before in the same table must carry the same comment.
    pub fn insert(&mut self, call: &MacroCall<'_>) -> Result<()> {
        let table_name = call.table.unwrap_or(&self.default_table);
        let table = self.tables.entry(table_name.to_string()).or_default();

        match table.entry(call.key.to_string()) {
            Entry::Occupied(existing) => {
                if existing.get().comment != call.comment {
                    return Err(LocError::Conflict {
                        table: table_name.to_string(),
                        key: call.key.to_string(),
                        existing: existing.get().comment.clone(),
                        incoming: call.comment.to_string(),
                    });
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(LocalisationEntry::untranslated(call.key, call.comment));
            }
        }
        Ok(())
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    pub fn into_tables(self) -> TableSet {
        self.tables
    }
}

/// Extract the tables of a single source text with the default table name.
pub fn extract(source: &str) -> Result<TableSet> {
    let mut collector = TableCollector::default();
    collector.add_source(source)?;
    Ok(collector.into_tables())
}
