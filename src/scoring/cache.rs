use std::collections::HashMap;

use super::engine::{score_entry, EntryScores};
use super::sex::SexCategory;
use crate::entry::CompetitionEntry;

/// Bit patterns of the scorer inputs for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ContentKey {
    total: u64,
    bodyweight: u64,
    sex: SexCategory,
}

impl ContentKey {
    fn of(entry: &CompetitionEntry) -> Self {
        Self {
            total: entry.total().to_bits(),
            bodyweight: entry.bodyweight.to_bits(),
            sex: entry.sex,
        }
    }
}

/// Memoised per-entry scores, keyed by entry id.
///
/// A cached value is reused only while the entry's total, bodyweight and
/// sex are unchanged; otherwise it is recomputed and replaced.
#[derive(Debug, Default)]
pub struct ScoreCache {
    scores: HashMap<u64, (ContentKey, EntryScores)>,
    hits: u64,
    misses: u64,
}

impl ScoreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_score(&mut self, entry: &CompetitionEntry) -> EntryScores {
        let key = ContentKey::of(entry);
        if let Some((cached_key, scores)) = self.scores.get(&entry.id) {
            if *cached_key == key {
                self.hits += 1;
                return *scores;
            }
        }

        self.misses += 1;
        let scores = score_entry(entry);
        self.scores.insert(entry.id, (key, scores));
        scores
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
