use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the trader felt over the session, as picked in the daily journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Confident,
    Calm,
    Focused,
    Neutral,
    Anxious,
    Frustrated,
    Fearful,
    Greedy,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Confident,
        Mood::Calm,
        Mood::Focused,
        Mood::Neutral,
        Mood::Anxious,
        Mood::Frustrated,
        Mood::Fearful,
        Mood::Greedy,
    ];
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Confident => write!(f, "confident"),
            Mood::Calm => write!(f, "calm"),
            Mood::Focused => write!(f, "focused"),
            Mood::Neutral => write!(f, "neutral"),
            Mood::Anxious => write!(f, "anxious"),
            Mood::Frustrated => write!(f, "frustrated"),
            Mood::Fearful => write!(f, "fearful"),
            Mood::Greedy => write!(f, "greedy"),
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "confident" => Ok(Mood::Confident),
            "calm" => Ok(Mood::Calm),
            "focused" => Ok(Mood::Focused),
            "neutral" => Ok(Mood::Neutral),
            "anxious" => Ok(Mood::Anxious),
            "frustrated" => Ok(Mood::Frustrated),
            "fearful" => Ok(Mood::Fearful),
            "greedy" => Ok(Mood::Greedy),
            _ => Err(format!("Unknown mood: {s}")),
        }
    }
}
