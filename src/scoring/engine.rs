use super::dots::dots;
use super::gl::gl;
use super::sex::SexCategory;
use crate::entry::{CompetitionEntry, Lifts};

/// A bodyweight-normalised scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    Dots,
    Gl,
}

impl Formula {
    pub const ALL: [Formula; 2] = [Formula::Dots, Formula::Gl];

    pub fn label(&self) -> &'static str {
        match self {
            Formula::Dots => "DOTS",
            Formula::Gl => "GL",
        }
    }
}

/// Both scores for one entry, computed from a single total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryScores {
    pub total: f64,
    pub dots: f64,
    pub gl: f64,
}

impl EntryScores {
    pub fn get(&self, formula: Formula) -> f64 {
        match formula {
            Formula::Dots => self.dots,
            Formula::Gl => self.gl,
        }
    }
}

pub fn score_lifts(lifts: &Lifts, body_weight: f64, sex: SexCategory) -> EntryScores {
    score_total(lifts.total(), body_weight, sex)
}

pub fn score_total(total: f64, body_weight: f64, sex: SexCategory) -> EntryScores {
    EntryScores {
        total,
        dots: dots(total, body_weight, sex),
        gl: gl(total, body_weight, sex),
    }
}

pub fn score_entry(entry: &CompetitionEntry) -> EntryScores {
    score_lifts(&entry.lifts, entry.bodyweight, entry.sex)
}
