use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects trades by the sign of their result. Zero-result trades only pass `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Profit,
    Loss,
}

impl ResultFilter {
    pub fn matches(&self, result: f64) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Profit => result > 0.0,
            ResultFilter::Loss => result < 0.0,
        }
    }
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultFilter::All => write!(f, "all"),
            ResultFilter::Profit => write!(f, "profit"),
            ResultFilter::Loss => write!(f, "loss"),
        }
    }
}

impl FromStr for ResultFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(ResultFilter::All),
            "profit" | "win" | "wins" => Ok(ResultFilter::Profit),
            "loss" | "losses" => Ok(ResultFilter::Loss),
            _ => Err(format!("Unknown result filter: {s}")),
        }
    }
}
