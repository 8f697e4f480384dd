use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCondition {
    Trending,
    Ranging,
    Volatile,
    Quiet,
    NewsDriven,
    Choppy,
}

impl MarketCondition {
    pub const ALL: [MarketCondition; 6] = [
        MarketCondition::Trending,
        MarketCondition::Ranging,
        MarketCondition::Volatile,
        MarketCondition::Quiet,
        MarketCondition::NewsDriven,
        MarketCondition::Choppy,
    ];
}

impl fmt::Display for MarketCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketCondition::Trending => write!(f, "trending"),
            MarketCondition::Ranging => write!(f, "ranging"),
            MarketCondition::Volatile => write!(f, "volatile"),
            MarketCondition::Quiet => write!(f, "quiet"),
            MarketCondition::NewsDriven => write!(f, "news_driven"),
            MarketCondition::Choppy => write!(f, "choppy"),
        }
    }
}

impl FromStr for MarketCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "trending" => Ok(MarketCondition::Trending),
            "ranging" | "range_bound" => Ok(MarketCondition::Ranging),
            "volatile" => Ok(MarketCondition::Volatile),
            "quiet" | "low_volume" => Ok(MarketCondition::Quiet),
            "news_driven" | "news" => Ok(MarketCondition::NewsDriven),
            "choppy" => Ok(MarketCondition::Choppy),
            _ => Err(format!("Unknown market condition: {s}")),
        }
    }
}
