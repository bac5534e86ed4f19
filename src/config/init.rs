use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::save_config;
use super::schema::{Config, DEFAULT_DATE_FORMAT};
use super::validation::validate_config;
use crate::entry::SortOrder;
use crate::scoring::SexCategory;
use crate::session::Prompter;

/// Run the interactive init wizard to create a config file.
///
/// Returns the path written, or `None` if the user aborted or input ended.
pub fn run_init_wizard<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_path: PathBuf,
) -> Result<Option<PathBuf>> {
    prompter.say("")?;
    prompter.say("lift-log configuration")?;
    prompter.say("======================")?;
    prompter.say("")?;

    // 1. Default sex category for the entry form
    let default_sex = loop {
        let question = "Default sex (male/female/none)";
        let Some(input) = prompter.prompt_with_default(question, "none")? else {
            return Ok(None);
        };
        if input.eq_ignore_ascii_case("none") {
            break None;
        }
        match input.parse::<SexCategory>() {
            Ok(sex) => break Some(sex),
            Err(e) => prompter.say(&format!("  Invalid: {}. Try again.", e))?,
        }
    };

    // 2. Date format
    prompter.say("Dates use chrono strftime syntax, e.g. '%Y-%m-%d' or '%d %b %Y'.")?;
    prompter.say("Time items such as '%H' are rejected.")?;
    let date_format = loop {
        let Some(input) = prompter.prompt_with_default("Date format", DEFAULT_DATE_FORMAT)? else {
            return Ok(None);
        };
        let candidate = Config {
            date_format: Some(input.clone()),
            ..Config::default()
        };
        match validate_config(&candidate) {
            Ok(()) => break input,
            Err(errors) => {
                let message = format!("  Invalid: {}. Try again.", errors.join("; "));
                prompter.say(&message)?;
            }
        }
    };

    // 3. List order
    let Some(newest_first) = prompter.prompt_yes_no("List newest entries first?", false)? else {
        return Ok(None);
    };
    let order = if newest_first {
        SortOrder::NewestFirst
    } else {
        SortOrder::OldestFirst
    };

    // 4. Config path
    let Some(path_str) = prompter.prompt_with_default(
        "Where should the config be saved?",
        &default_path.display().to_string(),
    )?
    else {
        return Ok(None);
    };
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompter.prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if overwrite != Some(true) {
            prompter.say("Aborted.")?;
            return Ok(None);
        }
    }

    // 5. Write config
    let config = Config {
        default_sex,
        date_format: Some(date_format),
        order: Some(order),
    };
    save_config(&config_path, &config)?;

    prompter.say("")?;
    prompter.say(&format!("Config written to {}", config_path.display()))?;
    Ok(Some(config_path))
}
