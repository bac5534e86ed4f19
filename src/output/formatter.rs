use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;
use std::io::IsTerminal;

use crate::entry::{CompetitionEntry, INPUT_DATE_FORMAT};
use crate::scoring::{EntryScores, Formula};

/// An entry with its calculated scores for display
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry<'a> {
    pub entry: &'a CompetitionEntry,
    pub scores: EntryScores,
}

/// One chart point per entry, scores rounded for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub dots: f64,
    pub gl: f64,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Round a score to 2 decimal places. Non-finite values pass through.
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Format a score with 2 decimals ("344.77"). NaN and infinities print as
/// "NaN", "inf" and "-inf" rather than being hidden.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

/// Format kilograms with at most 2 decimals and no trailing zeros
/// ("82.4", "200", "122.5")
pub fn format_kg(kg: f64) -> String {
    let formatted = format!("{:.2}", kg);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Format a date with a strftime format, falling back to ISO dates if the
/// format cannot be rendered.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format(INPUT_DATE_FORMAT).to_string();
    }
    out
}

/// Color a formatted score per formula
fn paint_score(formula: Formula, text: &str) -> String {
    match formula {
        Formula::Dots => text.green().bold().to_string(),
        Formula::Gl => text.cyan().bold().to_string(),
    }
}

/// Format one entry with detailed multi-line output (for verbose mode)
pub fn format_entry_detail(scored: &ScoredEntry, date_format: &str, use_colors: bool) -> String {
    let entry = scored.entry;
    let date = format_date(entry.date, date_format);

    let header = format!("#{} {} ({})", entry.id, date, entry.sex);
    let header = if use_colors {
        header.bold().to_string()
    } else {
        header
    };

    let mut lines = vec![
        header,
        format!("  Bodyweight: {} kg", format_kg(entry.bodyweight)),
        format!("  Squat: {} kg", format_kg(entry.lifts.squat)),
        format!("  Bench: {} kg", format_kg(entry.lifts.bench)),
        format!("  Deadlift: {} kg", format_kg(entry.lifts.deadlift)),
        format!("  Total: {} kg", format_kg(scored.scores.total)),
    ];
    for formula in Formula::ALL {
        let score = format_score(scored.scores.get(formula));
        let score = if use_colors {
            paint_score(formula, &score)
        } else {
            score
        };
        lines.push(format!("  {}: {}", formula.label(), score));
    }
    lines.join("\n")
}

/// Format entries as a table with a header row
/// Columns: Index, Date, Sex, Bodyweight, Total, then one per formula
/// Date column grows to fit the configured date format
pub fn format_entry_table(entries: &[ScoredEntry], date_format: &str, use_colors: bool) -> String {
    if entries.is_empty() {
        return "No entries logged.".to_string();
    }

    let dates: Vec<String> = entries
        .iter()
        .map(|scored| format_date(scored.entry.date, date_format))
        .collect();
    let date_width = dates
        .iter()
        .map(|d| d.chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len());

    let mut header = format!(
        "{:>3}  {:<date_width$}  {:<6}  {:>7}  {:>7}",
        "#",
        "Date",
        "Sex",
        "BW",
        "Total",
        date_width = date_width
    );
    for formula in Formula::ALL {
        header.push_str(&format!("  {:>8}", formula.label()));
    }
    let header = if use_colors {
        header.bold().to_string()
    } else {
        header
    };

    let rows = entries
        .iter()
        .zip(&dates)
        .enumerate()
        .map(|(idx, (scored, date))| {
            let index_str = format!("{:>2}.", idx + 1);
            let rest = format!(
                "{:<date_width$}  {:<6}  {:>7}  {:>7}",
                date,
                scored.entry.sex.as_str(),
                format_kg(scored.entry.bodyweight),
                format_kg(scored.scores.total),
                date_width = date_width
            );
            let scores = Formula::ALL.map(|formula| {
                let cell = format!("{:>8}", format_score(scored.scores.get(formula)));
                if use_colors {
                    paint_score(formula, &cell)
                } else {
                    cell
                }
            });

            if use_colors {
                format!("{}  {}  {}", index_str.dimmed(), rest, scores.join("  "))
            } else {
                format!("{}  {}  {}", index_str, rest, scores.join("  "))
            }
        });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format entries as tab-separated values for scripting
/// Columns: date, sex, bodyweight, total, dots, gl (no headers, no colors)
pub fn format_tsv(entries: &[ScoredEntry], date_format: &str) -> String {
    entries
        .iter()
        .map(|scored| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                format_date(scored.entry.date, date_format),
                scored.entry.sex,
                format_kg(scored.entry.bodyweight),
                format_kg(scored.scores.total),
                format_score(scored.scores.dots),
                format_score(scored.scores.gl)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build chart series in the order given (callers pass date-sorted entries)
pub fn chart_series(entries: &[ScoredEntry], date_format: &str) -> Vec<ChartPoint> {
    entries
        .iter()
        .map(|scored| ChartPoint {
            date: format_date(scored.entry.date, date_format),
            dots: round_score(scored.scores.dots),
            gl: round_score(scored.scores.gl),
        })
        .collect()
}

/// Pretty JSON array of chart points. Non-finite scores serialize as null.
pub fn format_series_json(points: &[ChartPoint]) -> Result<String> {
    serde_json::to_string_pretty(points).context("Failed to serialize chart series")
}

/// Format the total and every formula's score for a single lift
pub fn format_score_summary(scores: &EntryScores, use_colors: bool) -> String {
    let mut lines = vec![format!("Total: {} kg", format_kg(scores.total))];
    for formula in Formula::ALL {
        let score = format_score(scores.get(formula));
        let score = if use_colors {
            paint_score(formula, &score)
        } else {
            score
        };
        lines.push(format!("{}: {}", formula.label(), score));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::NewEntry;
    use crate::scoring::{score_entry, score_total, SexCategory};

    fn sample_entry(id: u64, date: (i32, u32, u32)) -> CompetitionEntry {
        CompetitionEntry::from_new(
            id,
            NewEntry {
                date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
                sex: SexCategory::Male,
                bodyweight: 80.0,
                squat: 200.0,
                bench: 120.0,
                deadlift: 180.0,
            },
        )
    }

    fn scored(entry: &CompetitionEntry) -> ScoredEntry<'_> {
        ScoredEntry {
            entry,
            scores: score_entry(entry),
        }
    }

    // format_score tests
    #[test]
    fn test_format_score_two_decimals() {
        assert_eq!(format_score(344.77322704386114), "344.77");
        assert_eq!(format_score(70.51865360442875), "70.52");
    }

    #[test]
    fn test_format_score_zero() {
        assert_eq!(format_score(0.0), "0.00");
    }

    #[test]
    fn test_format_score_non_finite_passthrough() {
        assert_eq!(format_score(f64::NAN), "NaN");
        assert_eq!(format_score(f64::INFINITY), "inf");
        assert_eq!(format_score(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(344.77322704386114), 344.77);
        assert!(round_score(f64::NAN).is_nan());
    }

    // format_kg tests
    #[test]
    fn test_format_kg_whole() {
        assert_eq!(format_kg(200.0), "200");
    }

    #[test]
    fn test_format_kg_fraction() {
        assert_eq!(format_kg(122.5), "122.5");
        assert_eq!(format_kg(82.35), "82.35");
    }

    #[test]
    fn test_format_kg_does_not_trim_integer_zeros() {
        assert_eq!(format_kg(100.0), "100");
    }

    // format_date tests
    #[test]
    fn test_format_date_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2024-03-09");
    }

    #[test]
    fn test_format_date_custom() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date, "%d %b %Y"), "09 Mar 2024");
    }

    #[test]
    fn test_format_date_invalid_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date, "%Q"), "2024-03-09");
    }

    // table tests
    #[test]
    fn test_format_entry_table_empty() {
        assert_eq!(
            format_entry_table(&[], "%Y-%m-%d", false),
            "No entries logged."
        );
    }

    #[test]
    fn test_format_entry_table_rows() {
        let a = sample_entry(1, (2023, 10, 14));
        let b = sample_entry(2, (2024, 4, 20));
        let rows = vec![scored(&a), scored(&b)];

        let table = format_entry_table(&rows, "%Y-%m-%d", false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("DOTS"));
        assert!(lines[0].contains("GL"));
        assert!(lines[1].starts_with(" 1."));
        assert!(lines[1].contains("2023-10-14"));
        assert!(lines[1].contains("344.77"));
        assert!(lines[1].contains("70.52"));
        assert!(lines[2].starts_with(" 2."));
    }

    #[test]
    fn test_format_entry_table_columns_align() {
        let a = sample_entry(1, (2023, 1, 5));
        let b = sample_entry(2, (2024, 11, 25));
        let rows = vec![scored(&a), scored(&b)];

        let table = format_entry_table(&rows, "%e %B %Y", false);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn test_format_entry_detail() {
        let entry = sample_entry(3, (2024, 4, 20));
        let result = format_entry_detail(&scored(&entry), "%Y-%m-%d", false);
        assert!(result.starts_with("#3 2024-04-20 (male)"));
        assert!(result.contains("Bodyweight: 80 kg"));
        assert!(result.contains("Total: 500 kg"));
        assert!(result.contains("DOTS: 344.77"));
        assert!(result.contains("GL: 70.52"));
    }

    #[test]
    fn test_format_tsv() {
        let entry = sample_entry(1, (2024, 4, 20));
        let result = format_tsv(&[scored(&entry)], "%Y-%m-%d");
        assert_eq!(result, "2024-04-20\tmale\t80\t500\t344.77\t70.52");
    }

    #[test]
    fn test_format_tsv_empty() {
        assert_eq!(format_tsv(&[], "%Y-%m-%d"), "");
    }

    // chart tests
    #[test]
    fn test_chart_series_rounds_and_keeps_order() {
        let a = sample_entry(1, (2024, 4, 20));
        let b = sample_entry(2, (2023, 10, 14));
        let points = chart_series(&[scored(&a), scored(&b)], "%Y-%m-%d");

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-04-20");
        assert_eq!(points[0].dots, 344.77);
        assert_eq!(points[0].gl, 70.52);
        assert_eq!(points[1].date, "2023-10-14");
    }

    #[test]
    fn test_format_series_json() {
        let points = vec![ChartPoint {
            date: "2024-04-20".to_string(),
            dots: 344.77,
            gl: 70.52,
        }];
        let json = format_series_json(&points).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["date"], "2024-04-20");
        assert_eq!(parsed[0]["dots"], 344.77);
    }

    #[test]
    fn test_format_series_json_nan_is_null() {
        let points = vec![ChartPoint {
            date: "2024-04-20".to_string(),
            dots: f64::NAN,
            gl: 1.0,
        }];
        let json = format_series_json(&points).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed[0]["dots"].is_null());
    }

    #[test]
    fn test_format_score_summary() {
        let scores = score_total(500.0, 80.0, SexCategory::Male);
        let result = format_score_summary(&scores, false);
        assert_eq!(result, "Total: 500 kg\nDOTS: 344.77\nGL: 70.52");
    }

    #[test]
    fn test_format_score_summary_colored_keeps_values() {
        let scores = score_total(500.0, 80.0, SexCategory::Male);
        let result = format_score_summary(&scores, true);
        assert!(result.contains("344.77"));
        assert!(result.contains("70.52"));
        assert!(result.contains('\u{1b}'));
    }
}
