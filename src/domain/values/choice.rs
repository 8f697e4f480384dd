use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A filter option that is either "all" or one specific value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "all"),
            Choice::Only(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Choice {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Ok(Choice::All)
        } else {
            Ok(Choice::Only(trimmed.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("ALL".parse::<Choice>().unwrap(), Choice::All);
        assert_eq!("".parse::<Choice>().unwrap(), Choice::All);
        assert_eq!(
            "EUR/USD".parse::<Choice>().unwrap(),
            Choice::Only("EUR/USD".into())
        );
    }

    #[test]
    fn test_only_is_exact() {
        let choice = Choice::Only("Calm".into());
        assert!(choice.matches("Calm"));
        assert!(!choice.matches("calm"));
        assert!(Choice::All.matches("anything"));
    }
}
