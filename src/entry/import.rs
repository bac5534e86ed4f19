use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;
use tracing::debug;

use super::types::NewEntry;

/// Top-level shape of an entries file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntriesFile {
    #[serde(default)]
    pub entries: Vec<NewEntry>,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load entries from a YAML file, or JSON when the extension is `.json`.
///
/// Entries are returned unvalidated and in file order; range checks happen
/// when they are added to a `RecordStore`.
pub fn load_entries(path: &Path) -> Result<Vec<NewEntry>> {
    let file: EntriesFile = if is_json(path) {
        let reader = File::open(path)
            .with_context(|| format!("Failed to open entries file at {}", path.display()))?;
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse {}: invalid JSON", path.display()))?
    } else {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read entries file at {}", path.display()))?;
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse {}: invalid YAML", path.display()))?
    };

    debug!(count = file.entries.len(), path = %path.display(), "loaded entries file");
    Ok(file.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SexCategory;
    use std::io::Write;

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_yaml_entries() {
        let file = write_temp(
            ".yaml",
            r#"
entries:
  - date: 2023-10-14
    sex: male
    bodyweight: 81.7
    squat: 190
    bench: 122.5
    deadlift: 240
  - date: 2024-04-20
    sex: male
    bodyweight: 82.9
    squat: 200
    bench: 127.5
    deadlift: 250
"#,
        );

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sex, SexCategory::Male);
        assert_eq!(entries[1].lifts().total(), 577.5);
    }

    #[test]
    fn test_load_json_entries() {
        let file = write_temp(
            ".json",
            r#"{"entries":[{"date":"2024-02-03","sex":"female","bodyweight":56.0,"squat":110,"bench":60,"deadlift":140}]}"#,
        );

        let entries = load_entries(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sex, SexCategory::Female);
    }

    #[test]
    fn test_empty_file_has_no_entries() {
        let file = write_temp(".yaml", "{}");
        assert!(load_entries(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let file = write_temp(".yaml", "entries: [ { date: nope } ]");
        let err = load_entries(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_entries(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read entries file"));
    }

    #[test]
    fn test_unknown_sex_is_parse_error() {
        let file = write_temp(
            ".json",
            r#"{"entries":[{"date":"2024-02-03","sex":"x","bodyweight":56.0,"squat":1,"bench":1,"deadlift":1}]}"#,
        );
        assert!(load_entries(file.path()).is_err());
    }
}
