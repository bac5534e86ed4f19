use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Competition category used to pick a coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexCategory {
    Male,
    Female,
}

impl SexCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SexCategory::Male => "male",
            SexCategory::Female => "female",
        }
    }
}

impl fmt::Display for SexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SexCategory {
    type Err = anyhow::Error;

    /// Accepts "male"/"female" or "m"/"f", case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(SexCategory::Male),
            "female" | "f" => Ok(SexCategory::Female),
            "" => bail!("sex category cannot be empty"),
            other => bail!("unknown sex category '{}', use male or female", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names() {
        assert_eq!("male".parse::<SexCategory>().unwrap(), SexCategory::Male);
        assert_eq!(
            "female".parse::<SexCategory>().unwrap(),
            SexCategory::Female
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " Female ".parse::<SexCategory>().unwrap(),
            SexCategory::Female
        );
        assert_eq!("MALE".parse::<SexCategory>().unwrap(), SexCategory::Male);
    }

    #[test]
    fn test_parse_short_forms() {
        assert_eq!("m".parse::<SexCategory>().unwrap(), SexCategory::Male);
        assert_eq!("F".parse::<SexCategory>().unwrap(), SexCategory::Female);
    }

    #[test]
    fn test_parse_empty_is_error() {
        let err = "".parse::<SexCategory>().unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "other".parse::<SexCategory>().unwrap_err();
        assert!(err.to_string().contains("unknown sex category 'other'"));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for sex in [SexCategory::Male, SexCategory::Female] {
            assert_eq!(sex.to_string().parse::<SexCategory>().unwrap(), sex);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&SexCategory::Female).unwrap();
        assert_eq!(json, "\"female\"");
        let parsed: SexCategory = serde_saphyr::from_str("male").unwrap();
        assert_eq!(parsed, SexCategory::Male);
    }
}
