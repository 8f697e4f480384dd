//! Per-dimension performance breakdowns: emotion, instrument, weekday, month.

use crate::domain::entities::trade::Trade;
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Label used for trades logged without an emotion.
pub const UNSPECIFIED_EMOTION: &str = "Unspecified";

/// Weekday labels in calendar order, Sunday first.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Emotion,
    Instrument,
    Weekday,
    Month,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Emotion => write!(f, "emotion"),
            Dimension::Instrument => write!(f, "instrument"),
            Dimension::Weekday => write!(f, "weekday"),
            Dimension::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emotion" => Ok(Dimension::Emotion),
            "instrument" | "pair" | "symbol" => Ok(Dimension::Instrument),
            "weekday" | "day" => Ok(Dimension::Weekday),
            "month" => Ok(Dimension::Month),
            _ => Err(format!("Unknown dimension: {s}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: String,
    pub trades: usize,
    pub wins: usize,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    /// Percentage (0–100).
    pub win_rate: f64,
}

impl GroupStats {
    fn empty(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }

    fn push(&mut self, trade: &Trade) {
        self.trades += 1;
        self.total_pnl += trade.result;
        if trade.is_win() {
            self.wins += 1;
        }
    }

    fn finish(mut self) -> Self {
        if self.trades > 0 {
            self.avg_pnl = self.total_pnl / self.trades as f64;
            self.win_rate = self.wins as f64 / self.trades as f64 * 100.0;
        }
        self
    }
}

/// Groups closed trades by key, in first-seen order. Only keys that occur
/// produce a group.
fn group_by<F>(trades: &[Trade], key_of: F) -> Vec<GroupStats>
where
    F: Fn(&Trade) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<GroupStats> = Vec::new();
    for trade in trades.iter().filter(|t| t.is_closed()) {
        let key = key_of(trade);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(GroupStats::empty(&key));
            groups.len() - 1
        });
        groups[slot].push(trade);
    }
    groups.into_iter().map(GroupStats::finish).collect()
}

fn sort_by_avg_pnl_desc(groups: &mut [GroupStats]) {
    groups.sort_by(|a, b| {
        b.avg_pnl
            .partial_cmp(&a.avg_pnl)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Sorted by average P&L, best first.
pub fn by_emotion(trades: &[Trade]) -> Vec<GroupStats> {
    let mut groups = group_by(trades, |t| {
        let emotion = t.emotion.trim();
        if emotion.is_empty() {
            UNSPECIFIED_EMOTION.to_string()
        } else {
            emotion.to_string()
        }
    });
    sort_by_avg_pnl_desc(&mut groups);
    groups
}

/// Sorted by average P&L, best first.
pub fn by_instrument(trades: &[Trade]) -> Vec<GroupStats> {
    let mut groups = group_by(trades, |t| t.instrument.clone());
    sort_by_avg_pnl_desc(&mut groups);
    groups
}

/// Always seven entries, Sunday through Saturday, so chart axes stay fixed.
pub fn by_weekday(trades: &[Trade]) -> Vec<GroupStats> {
    let mut days: Vec<GroupStats> = WEEKDAYS.iter().map(|d| GroupStats::empty(d)).collect();
    for trade in trades.iter().filter(|t| t.is_closed()) {
        let idx = trade.timestamp.weekday().num_days_from_sunday() as usize;
        days[idx].push(trade);
    }
    days.into_iter().map(GroupStats::finish).collect()
}

/// Keyed `YYYY-MM`, oldest month first.
pub fn by_month(trades: &[Trade]) -> Vec<GroupStats> {
    let mut groups = group_by(trades, |t| t.timestamp.format("%Y-%m").to_string());
    groups.sort_by(|a, b| a.key.cmp(&b.key));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::*;

    fn sample() -> Vec<Trade> {
        vec![
            // 2024-01-15 is a Monday.
            with_emotion(closed("1", "EUR/USD", 250.0, at(2024, 1, 15)), "Confident"),
            with_emotion(closed("2", "GBP/USD", -150.0, at(2024, 1, 16)), "Anxious"),
            with_emotion(closed("3", "EUR/USD", 100.0, at(2024, 2, 5)), "Confident"),
            with_emotion(closed("4", "EUR/USD", -50.0, at(2024, 2, 6)), "Anxious"),
            with_emotion(closed("5", "USD/JPY", 520.0, at(2024, 1, 17)), ""),
            with_emotion(open("6", "XAU/USD", at(2024, 2, 7)), "Greedy"),
        ]
    }

    #[test]
    fn test_emotion_groups_sorted_by_avg_pnl() {
        let groups = by_emotion(&sample());
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec![UNSPECIFIED_EMOTION, "Confident", "Anxious"]);

        let confident = &groups[1];
        assert_eq!(confident.trades, 2);
        assert_eq!(confident.wins, 2);
        assert_eq!(confident.total_pnl, 350.0);
        assert_eq!(confident.avg_pnl, 175.0);
        assert_eq!(confident.win_rate, 100.0);

        let anxious = &groups[2];
        assert_eq!(anxious.avg_pnl, -100.0);
        assert_eq!(anxious.win_rate, 0.0);
    }

    #[test]
    fn test_open_trades_never_form_groups() {
        let groups = by_emotion(&sample());
        assert!(groups.iter().all(|g| g.key != "Greedy"));
        assert!(by_instrument(&sample()).iter().all(|g| g.key != "XAU/USD"));
    }

    #[test]
    fn test_group_average_is_sum_over_count() {
        for group in by_instrument(&sample()) {
            assert_eq!(group.avg_pnl, group.total_pnl / group.trades as f64);
            assert_eq!(
                group.win_rate,
                group.wins as f64 / group.trades as f64 * 100.0
            );
        }
    }

    #[test]
    fn test_instrument_groups() {
        let groups = by_instrument(&sample());
        assert_eq!(groups[0].key, "USD/JPY");
        let eur = groups.iter().find(|g| g.key == "EUR/USD").unwrap();
        assert_eq!(eur.trades, 3);
        assert_eq!(eur.total_pnl, 300.0);
        assert_eq!(eur.avg_pnl, 100.0);
    }

    #[test]
    fn test_weekday_is_preseeded() {
        let days = by_weekday(&sample());
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].key, "Sunday");
        assert_eq!(days[0].trades, 0);
        assert_eq!(days[0].win_rate, 0.0);
        // Monday: Jan 15 and Feb 5.
        assert_eq!(days[1].key, "Monday");
        assert_eq!(days[1].trades, 2);
        assert_eq!(days[1].total_pnl, 350.0);

        let empty = by_weekday(&[]);
        assert_eq!(empty.len(), 7);
        assert!(empty.iter().all(|d| d.trades == 0));
    }

    #[test]
    fn test_month_series_is_chronological() {
        let months = by_month(&sample());
        let keys: Vec<&str> = months.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-01", "2024-02"]);
        assert_eq!(months[0].trades, 3);
        assert_eq!(months[1].total_pnl, 50.0);
    }

    #[test]
    fn test_empty_input_has_no_groups() {
        assert!(by_emotion(&[]).is_empty());
        assert!(by_instrument(&[]).is_empty());
        assert!(by_month(&[]).is_empty());
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("Weekday".parse::<Dimension>().unwrap(), Dimension::Weekday);
        assert!("hour".parse::<Dimension>().is_err());
    }
}
