use serde::{Deserialize, Serialize};

use crate::entry::SortOrder;
use crate::scoring::SexCategory;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display preferences.
///
/// Example YAML:
/// ```yaml
/// default_sex: female
/// date_format: "%d %b %Y"
/// order: newest_first
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Pre-filled sex category in the session form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sex: Option<SexCategory>,

    /// chrono strftime format used when printing dates (default: "%Y-%m-%d")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    /// Order of listed entries (default: oldest_first)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

impl Config {
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn order(&self) -> SortOrder {
        self.order.unwrap_or_default()
    }
}
