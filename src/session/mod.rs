//! Interactive entry form: prompts for one competition result at a time,
//! appends it to an in-memory store and re-renders the scored list.

pub mod prompt;

pub use prompt::Prompter;

use anyhow::Result;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::entry::{parse_draft, EntryDraft, RecordStore, SortOrder, INPUT_DATE_FORMAT};
use crate::output::{format_entry_table, ScoredEntry};
use crate::scoring::{ScoreCache, SexCategory};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub date_format: String,
    pub order: SortOrder,
    pub default_sex: Option<SexCategory>,
    /// Pre-filled value for the date field
    pub today: NaiveDate,
    pub use_colors: bool,
}

/// Date-sorted entries paired with their (cached) scores.
pub fn scored_view<'a>(
    store: &'a RecordStore,
    cache: &mut ScoreCache,
    order: SortOrder,
) -> Vec<ScoredEntry<'a>> {
    store
        .sorted_by_date(order)
        .into_iter()
        .map(|entry| ScoredEntry {
            entry,
            scores: cache.get_or_score(entry),
        })
        .collect()
}

fn render<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &RecordStore,
    cache: &mut ScoreCache,
    options: &SessionOptions,
) -> Result<()> {
    let view = scored_view(store, cache, options.order);
    prompter.say("")?;
    let table = format_entry_table(&view, &options.date_format, options.use_colors);
    prompter.say(&table)?;
    prompter.say("")
}

/// Prompt for every field of one entry. `None` if input ended mid-form.
fn read_draft<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &SessionOptions,
) -> Result<Option<EntryDraft>> {
    let today = options.today.format(INPUT_DATE_FORMAT).to_string();
    let default_sex = options.default_sex.map(|s| s.as_str()).unwrap_or("");

    let Some(date) = prompter.prompt_with_default("Date (YYYY-MM-DD)", &today)? else {
        return Ok(None);
    };
    let Some(sex) = prompter.prompt_with_default("Sex (male/female)", default_sex)? else {
        return Ok(None);
    };
    let Some(bodyweight) = prompter.prompt("Bodyweight (kg): ")? else {
        return Ok(None);
    };
    let Some(squat) = prompter.prompt("Squat (kg): ")? else {
        return Ok(None);
    };
    let Some(bench) = prompter.prompt("Bench (kg): ")? else {
        return Ok(None);
    };
    let Some(deadlift) = prompter.prompt("Deadlift (kg): ")? else {
        return Ok(None);
    };

    Ok(Some(EntryDraft {
        date,
        sex,
        bodyweight,
        squat,
        bench,
        deadlift,
    }))
}

/// Run the form loop until the user declines another entry or input ends.
/// Returns the number of entries added during this session.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    store: &mut RecordStore,
    cache: &mut ScoreCache,
    options: &SessionOptions,
) -> Result<usize> {
    let mut added = 0;

    if !store.is_empty() {
        render(prompter, store, cache, options)?;
    }

    loop {
        let prompt = if store.is_empty() {
            "Log a competition result?"
        } else {
            "Log another result?"
        };
        match prompter.prompt_yes_no(prompt, true)? {
            Some(true) => {}
            Some(false) | None => break,
        }

        let Some(draft) = read_draft(prompter, options)? else {
            break;
        };

        let new_entry = match parse_draft(&draft) {
            Ok(entry) => entry,
            Err(errors) => {
                debug!(count = errors.len(), "entry rejected");
                prompter.say("Entry not added:")?;
                for error in errors {
                    prompter.say(&format!("  - {}", error))?;
                }
                continue;
            }
        };

        match store.add(new_entry) {
            Ok(entry) => {
                debug!(id = entry.id, "session entry stored");
                added += 1;
            }
            Err(errors) => {
                prompter.say("Entry not added:")?;
                for error in errors {
                    prompter.say(&format!("  - {}", error))?;
                }
                continue;
            }
        }

        render(prompter, store, cache, options)?;
    }

    debug!(added, total = store.len(), "session finished");
    Ok(added)
}
