use crate::application::trade_store::TradeStore;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::values::breakdown::{self, Dimension, GroupStats};
use crate::domain::values::performance::{equity_curve, EquityPoint, PerformanceSummary};
use crate::domain::values::time_window::TimeWindow;
use crate::domain::values::trade_filter::TradeFilter;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Depends only on the selected trades and the window.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub window: TimeWindow,
    pub summary: PerformanceSummary,
    pub by_emotion: Vec<GroupStats>,
    pub by_instrument: Vec<GroupStats>,
    pub by_weekday: Vec<GroupStats>,
    pub by_month: Vec<GroupStats>,
    pub equity_curve: Vec<EquityPoint>,
}

impl PerformanceReport {
    pub fn from_trades(trades: &[Trade], window: TimeWindow) -> Self {
        Self {
            window,
            summary: PerformanceSummary::from_trades(trades),
            by_emotion: breakdown::by_emotion(trades),
            by_instrument: breakdown::by_instrument(trades),
            by_weekday: breakdown::by_weekday(trades),
            by_month: breakdown::by_month(trades),
            equity_curve: equity_curve(trades),
        }
    }

    pub fn breakdown(&self, dimension: Dimension) -> &[GroupStats] {
        match dimension {
            Dimension::Emotion => &self.by_emotion,
            Dimension::Instrument => &self.by_instrument,
            Dimension::Weekday => &self.by_weekday,
            Dimension::Month => &self.by_month,
        }
    }
}

struct Memo {
    revision: u64,
    window: TimeWindow,
    trade_ids: Vec<String>,
    report: Arc<PerformanceReport>,
}

/// Statistics view. The last report is kept and reused while the store
/// revision, window and set of selected trades stay the same.
pub struct StatsUseCase {
    store: Arc<TradeStore>,
    memo: Mutex<Option<Memo>>,
}

impl StatsUseCase {
    pub fn new(store: Arc<TradeStore>) -> Self {
        Self {
            store,
            memo: Mutex::new(None),
        }
    }

    pub fn report(&self, window: TimeWindow) -> Result<Arc<PerformanceReport>, DomainError> {
        self.report_at(window, Utc::now())
    }

    pub fn report_at(
        &self,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Result<Arc<PerformanceReport>, DomainError> {
        let (trades, revision) = self.store.snapshot()?;
        let selected = TradeFilter::closed_within(window).apply(&trades, now);
        let trade_ids: Vec<String> = selected.iter().map(|t| t.id.clone()).collect();

        let mut memo = self
            .memo
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        if let Some(m) = memo.as_ref() {
            if m.revision == revision && m.window == window && m.trade_ids == trade_ids {
                debug!(revision, %window, "reusing memoised report");
                return Ok(m.report.clone());
            }
        }

        let report = Arc::new(PerformanceReport::from_trades(&selected, window));
        *memo = Some(Memo {
            revision,
            window,
            trade_ids,
            report: report.clone(),
        });
        Ok(report)
    }

    pub fn breakdown(
        &self,
        dimension: Dimension,
        window: TimeWindow,
    ) -> Result<Vec<GroupStats>, DomainError> {
        Ok(self.report(window)?.breakdown(dimension).to_vec())
    }
}
