use crate::application::trade_store::TradeStore;
use crate::domain::error::DomainError;
use crate::domain::values::breakdown::{by_emotion, GroupStats};
use crate::domain::values::learning::learning_points;
use crate::domain::values::time_window::TimeWindow;
use crate::domain::values::trade_filter::TradeFilter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Psychology view: how emotions relate to results, and what the notes say.
#[derive(Debug, Clone, Serialize)]
pub struct PsychologyInsights {
    pub window: TimeWindow,
    pub emotions: Vec<GroupStats>,
    pub best_emotion: Option<GroupStats>,
    pub worst_emotion: Option<GroupStats>,
    pub learning_points: Vec<String>,
    pub recommendations: Vec<String>,
}

pub struct InsightsUseCase {
    store: Arc<TradeStore>,
}

impl InsightsUseCase {
    pub fn new(store: Arc<TradeStore>) -> Self {
        Self { store }
    }

    pub fn insights(&self, window: TimeWindow) -> Result<PsychologyInsights, DomainError> {
        self.insights_at(window, Utc::now())
    }

    pub fn insights_at(
        &self,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Result<PsychologyInsights, DomainError> {
        let trades = TradeFilter::closed_within(window).apply(&self.store.list()?, now);
        let emotions = by_emotion(&trades);
        let best_emotion = emotions.first().cloned();
        let worst_emotion = emotions.last().cloned();
        let recommendations = recommendations(best_emotion.as_ref(), worst_emotion.as_ref());

        Ok(PsychologyInsights {
            window,
            learning_points: learning_points(&trades),
            emotions,
            best_emotion,
            worst_emotion,
            recommendations,
        })
    }
}

fn recommendations(best: Option<&GroupStats>, worst: Option<&GroupStats>) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(best) = best.filter(|g| g.avg_pnl > 0.0) {
        out.push(format!(
            "Your best results come when you feel {} (avg P&L {:.2}, win rate {:.1}%).",
            best.key, best.avg_pnl, best.win_rate
        ));
    }
    if let Some(worst) = worst.filter(|g| g.avg_pnl < 0.0) {
        out.push(format!(
            "Step back when you feel {}: average P&L {:.2} over {} trades.",
            worst.key, worst.avg_pnl, worst.trades
        ));
    }
    out
}
