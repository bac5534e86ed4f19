use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use std::fmt::Write;

use super::schema::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref fmt) = config.date_format {
        if fmt.trim().is_empty() {
            errors.push("date_format: cannot be empty".to_string());
        } else if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
            errors.push(format!("date_format: invalid strftime format '{}'", fmt));
        } else if !renders_for_date(fmt) {
            let message = format!("date_format: '{}' cannot be rendered for a date", fmt);
            errors.push(message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Dates carry no time or offset, so items like `%H` or `%z` fail to render.
fn renders_for_date(fmt: &str) -> bool {
    let mut out = String::new();
    write!(out, "{}", NaiveDate::default().format(fmt)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_date_format(fmt: &str) -> Config {
        Config {
            date_format: Some(fmt.to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_valid_date_format() {
        assert!(validate_config(&with_date_format("%d.%m.%Y")).is_ok());
        assert!(validate_config(&with_date_format("%e %B %Y (%a)")).is_ok());
    }

    #[test]
    fn test_invalid_date_format() {
        let errors = validate_config(&with_date_format("%Q")).unwrap_err();
        assert!(errors[0].contains("date_format: invalid strftime format '%Q'"));
    }

    #[test]
    fn test_empty_date_format() {
        let errors = validate_config(&with_date_format("  ")).unwrap_err();
        assert_eq!(errors, vec!["date_format: cannot be empty"]);
    }

    #[test]
    fn test_time_items_rejected() {
        let errors = validate_config(&with_date_format("%d %b %Y %H:%M")).unwrap_err();
        assert_eq!(
            errors,
            vec!["date_format: '%d %b %Y %H:%M' cannot be rendered for a date"]
        );
    }

    #[test]
    fn test_offset_item_rejected() {
        assert!(validate_config(&with_date_format("%Y-%m-%d %z")).is_err());
    }
}
