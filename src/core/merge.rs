//! Reconciling an existing table with freshly extracted entries.
//!
//! The comment is the only change signal: a translator may have edited a
//! value, and that edit survives every policy except `Overwrite` unless the
//! developer changed the comment.

use std::fmt;

use clap::ValueEnum;

use super::table::LocalisationTable;

/// How an existing table and an incoming table are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum MergePolicy {
    /// Only add keys that are not present yet.
    #[default]
    #[value(alias = "i")]
    InsertOnly,
    /// Replace the existing table with the incoming one.
    #[value(alias = "o")]
    Overwrite,
    /// Add new keys and refresh keys whose comment changed.
    #[value(alias = "b")]
    MinimalMerge,
    /// Like `minimal-merge`, and also remove keys that are no longer referenced.
    #[value(alias = "f")]
    FullMerge,
}

impl MergePolicy {
    fn updates_changed_comments(self) -> bool {
        matches!(self, MergePolicy::MinimalMerge | MergePolicy::FullMerge)
    }

    fn prunes_unreferenced(self) -> bool {
        matches!(self, MergePolicy::FullMerge)
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergePolicy::InsertOnly => "insert-only",
            MergePolicy::Overwrite => "overwrite",
            MergePolicy::MinimalMerge => "minimal-merge",
            MergePolicy::FullMerge => "full-merge",
        };
        f.write_str(name)
    }
}

/// Number of keys added, updated and removed by a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCounts {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
}

impl ChangeCounts {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.updated == 0 && self.removed == 0
    }
}

impl std::ops::AddAssign for ChangeCounts {
    fn add_assign(&mut self, other: Self) {
        self.added += other.added;
        self.updated += other.updated;
        self.removed += other.removed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub counts: ChangeCounts,
    pub table: LocalisationTable,
}

/// Combine `existing` and `incoming` according to `policy`.
///
/// Except for `Overwrite`, the steps run in a fixed order on a copy of
/// `existing`: add new keys, then refresh keys whose comment changed,
/// then (full merge only) drop keys absent from `incoming`.
pub fn merge(
    existing: &LocalisationTable,
    incoming: &LocalisationTable,
    policy: MergePolicy,
) -> MergeResult {
    if policy == MergePolicy::Overwrite {
        return overwrite(existing, incoming);
    }

    let mut counts = ChangeCounts::default();
    let mut table = existing.clone();

    for (key, entry) in incoming {
        if !table.contains_key(key) {
            table.insert(key.clone(), entry.clone());
            counts.added += 1;
        }
    }

    if policy.updates_changed_comments() {
        for (key, entry) in incoming {
            if let Some(current) = table.get_mut(key)
                && current.comment != entry.comment
            {
                *current = entry.clone();
                counts.updated += 1;
            }
        }
    }

    if policy.prunes_unreferenced() {
        let before = table.len();
        table.retain(|key, _| incoming.contains_key(key));
        counts.removed = before - table.len();
    }

    MergeResult { counts, table }
}

fn overwrite(existing: &LocalisationTable, incoming: &LocalisationTable) -> MergeResult {
    let updated = incoming
        .keys()
        .filter(|key| existing.contains_key(*key))
        .count();
    let removed = existing
        .keys()
        .filter(|key| !incoming.contains_key(*key))
        .count();

    MergeResult {
        counts: ChangeCounts {
            added: incoming.len() - updated,
            updated,
            removed,
        },
        table: incoming.clone(),
    }
}
