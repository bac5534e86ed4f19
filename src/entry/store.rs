use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{CompetitionEntry, NewEntry};
use super::validation::validate_new_entry;

/// Presentation order for date-sorted views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    OldestFirst,
    NewestFirst,
}

/// Append-only, in-memory log of competition entries.
///
/// Entries keep their insertion order; ids are assigned sequentially
/// starting at 1 and never reused.
#[derive(Debug)]
pub struct RecordStore {
    entries: Vec<CompetitionEntry>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Validate and append an entry.
    pub fn add(&mut self, entry: NewEntry) -> Result<&CompetitionEntry, Vec<String>> {
        validate_new_entry(&entry)?;
        Ok(self.push(entry))
    }

    /// Append a batch of entries, all or nothing.
    ///
    /// Every entry is validated first; errors are prefixed with the entry
    /// index (`entries[2].squat: ...`). Returns the number of entries added.
    pub fn extend(&mut self, entries: Vec<NewEntry>) -> Result<usize, Vec<String>> {
        let mut errors = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if let Err(entry_errors) = validate_new_entry(entry) {
                for e in entry_errors {
                    errors.push(format!("entries[{}].{}", i, e));
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let count = entries.len();
        for entry in entries {
            self.push(entry);
        }
        Ok(count)
    }

    fn push(&mut self, entry: NewEntry) -> &CompetitionEntry {
        let id = self.next_id;
        self.next_id += 1;
        debug!(id, date = %entry.date, sex = %entry.sex, "entry added");
        self.entries.push(CompetitionEntry::from_new(id, entry));
        &self.entries[self.entries.len() - 1]
    }

    pub fn get(&self, id: u64) -> Option<&CompetitionEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CompetitionEntry] {
        &self.entries
    }

    /// Entries ordered by date. Entries on the same date keep insertion order.
    pub fn sorted_by_date(&self, order: SortOrder) -> Vec<&CompetitionEntry> {
        let mut sorted: Vec<&CompetitionEntry> = self.entries.iter().collect();
        match order {
            SortOrder::OldestFirst => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::NewestFirst => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
