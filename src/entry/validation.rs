use chrono::NaiveDate;

use super::types::{EntryDraft, NewEntry};
use crate::scoring::SexCategory;

/// Date format accepted from form input.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate an entry before it is stored or scored.
/// Returns all validation errors at once (not just the first).
pub fn validate_new_entry(entry: &NewEntry) -> Result<(), Vec<String>> {
    validate_measurements(
        entry.bodyweight,
        &[
            ("squat", entry.squat),
            ("bench", entry.bench),
            ("deadlift", entry.deadlift),
        ],
    )
}

/// Check a bodyweight and any number of named lift values.
///
/// Bodyweight must be finite and greater than zero; lifts must be finite
/// and non-negative.
pub fn validate_measurements(bodyweight: f64, lifts: &[(&str, f64)]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let lifts: Vec<(&str, Option<f64>)> = lifts.iter().map(|(f, v)| (*f, Some(*v))).collect();
    check_ranges(&mut errors, Some(bodyweight), &lifts);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Range checks for whichever values are present.
fn check_ranges(
    errors: &mut Vec<String>,
    bodyweight: Option<f64>,
    lifts: &[(&str, Option<f64>)],
) {
    if let Some(bw) = bodyweight {
        if !bw.is_finite() || bw <= 0.0 {
            errors.push("bodyweight: must be greater than zero".to_string());
        }
    }
    for (field, value) in lifts {
        if let Some(v) = value {
            if !v.is_finite() || *v < 0.0 {
                errors.push(format!("{}: must be non-negative", field));
            }
        }
    }
}

/// Parse raw form text into a validated `NewEntry`.
///
/// Parse failures and range checks are collected together, so the caller
/// sees every problem with the draft in one pass.
pub fn parse_draft(draft: &EntryDraft) -> Result<NewEntry, Vec<String>> {
    let mut errors = Vec::new();

    let date = match draft.date.trim() {
        "" => {
            errors.push("date: cannot be empty".to_string());
            None
        }
        s => match NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT) {
            Ok(d) => Some(d),
            Err(e) => {
                errors.push(format!("date: invalid '{}' - {}", s, e));
                None
            }
        },
    };

    let sex = match draft.sex.parse::<SexCategory>() {
        Ok(s) => Some(s),
        Err(e) => {
            errors.push(format!("sex: {}", e));
            None
        }
    };

    let mut number = |field: &str, raw: &str| -> Option<f64> {
        let raw = raw.trim();
        if raw.is_empty() {
            errors.push(format!("{}: cannot be empty", field));
            return None;
        }
        match raw.parse::<f64>() {
            Ok(v) => Some(v),
            Err(e) => {
                errors.push(format!("{}: invalid number '{}' - {}", field, raw, e));
                None
            }
        }
    };

    let bodyweight = number("bodyweight", &draft.bodyweight);
    let squat = number("squat", &draft.squat);
    let bench = number("bench", &draft.bench);
    let deadlift = number("deadlift", &draft.deadlift);

    check_ranges(
        &mut errors,
        bodyweight,
        &[("squat", squat), ("bench", bench), ("deadlift", deadlift)],
    );

    match (date, sex, bodyweight, squat, bench, deadlift) {
        (Some(date), Some(sex), Some(bodyweight), Some(squat), Some(bench), Some(deadlift))
            if errors.is_empty() =>
        {
            Ok(NewEntry {
                date,
                sex,
                bodyweight,
                squat,
                bench,
                deadlift,
            })
        }
        _ => Err(errors),
    }
}
