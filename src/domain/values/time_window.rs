use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Look-back window of the statistics view, measured from "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Week,
    Month,
    Quarter,
    #[default]
    All,
}

impl TimeWindow {
    pub fn days(&self) -> Option<i64> {
        match self {
            TimeWindow::Week => Some(7),
            TimeWindow::Month => Some(30),
            TimeWindow::Quarter => Some(90),
            TimeWindow::All => None,
        }
    }

    /// Earliest timestamp inside the window, `None` when unbounded.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|d| now - Duration::days(d))
    }

    pub fn contains(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            Some(cutoff) => timestamp >= cutoff,
            None => true,
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindow::Week => write!(f, "7d"),
            TimeWindow::Month => write!(f, "30d"),
            TimeWindow::Quarter => write!(f, "90d"),
            TimeWindow::All => write!(f, "all"),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7d" | "week" => Ok(TimeWindow::Week),
            "30d" | "month" => Ok(TimeWindow::Month),
            "90d" | "quarter" => Ok(TimeWindow::Quarter),
            "all" => Ok(TimeWindow::All),
            _ => Err(format!("Unknown time window: {s} (use 7d, 30d, 90d or all)")),
        }
    }
}
