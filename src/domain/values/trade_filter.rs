use crate::domain::entities::trade::Trade;
use crate::domain::values::choice::Choice;
use crate::domain::values::result_filter::ResultFilter;
use crate::domain::values::time_window::TimeWindow;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Conjunctive trade filter used by the trade list and the statistics view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeFilter {
    /// Case-insensitive substring of notes, either mindset or instrument.
    pub search: Option<String>,
    pub instrument: Choice,
    pub emotion: Choice,
    pub result: ResultFilter,
    /// When set, only closed trades inside the window pass.
    pub window: Option<TimeWindow>,
}

impl TradeFilter {
    /// Closed trades inside `window`, the input of the statistics view.
    pub fn closed_within(window: TimeWindow) -> Self {
        Self {
            window: Some(window),
            ..Self::default()
        }
    }

    pub fn matches(&self, trade: &Trade, now: DateTime<Utc>) -> bool {
        if let Some(needle) = self.search.as_deref().map(str::trim) {
            let needle = needle.to_lowercase();
            if !needle.is_empty()
                && !trade
                    .text_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        if !self.instrument.matches(&trade.instrument) || !self.emotion.matches(&trade.emotion) {
            return false;
        }
        if !self.result.matches(trade.result) {
            return false;
        }
        if let Some(window) = self.window {
            if !trade.is_closed() || !window.contains(trade.timestamp, now) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, trades: &[Trade], now: DateTime<Utc>) -> Vec<Trade> {
        trades
            .iter()
            .filter(|t| self.matches(t, now))
            .cloned()
            .collect()
    }
}
