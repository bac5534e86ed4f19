use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::SexCategory;

/// Best successful attempts of one meet, in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifts {
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
}

impl Lifts {
    pub fn new(squat: f64, bench: f64, deadlift: f64) -> Self {
        Self {
            squat,
            bench,
            deadlift,
        }
    }

    /// Squat + bench + deadlift
    pub fn total(&self) -> f64 {
        self.squat + self.bench + self.deadlift
    }
}

/// A competition result that has not been stored yet.
///
/// This is also the item shape of an entries file:
/// ```yaml
/// entries:
///   - date: 2024-03-09
///     sex: male
///     bodyweight: 82.4
///     squat: 200
///     bench: 130
///     deadlift: 250
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub sex: SexCategory,
    pub bodyweight: f64,
    pub squat: f64,
    pub bench: f64,
    pub deadlift: f64,
}

impl NewEntry {
    pub fn lifts(&self) -> Lifts {
        Lifts::new(self.squat, self.bench, self.deadlift)
    }
}

/// A stored competition result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitionEntry {
    pub id: u64,
    pub date: NaiveDate,
    pub sex: SexCategory,
    pub bodyweight: f64,
    pub lifts: Lifts,
}

impl CompetitionEntry {
    pub fn from_new(id: u64, entry: NewEntry) -> Self {
        Self {
            id,
            date: entry.date,
            sex: entry.sex,
            bodyweight: entry.bodyweight,
            lifts: entry.lifts(),
        }
    }

    pub fn total(&self) -> f64 {
        self.lifts.total()
    }
}

/// Raw form text for one entry, before parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub date: String,
    pub sex: String,
    pub bodyweight: String,
    pub squat: String,
    pub bench: String,
    pub deadlift: String,
}
