use crate::application::trade_store::TradeStore;
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::DomainError;
use crate::domain::values::trade_filter::TradeFilter;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

pub struct TradeUseCase {
    store: Arc<TradeStore>,
}

impl TradeUseCase {
    pub fn new(store: Arc<TradeStore>) -> Self {
        Self { store }
    }

    pub fn add(&self, draft: TradeDraft) -> Result<Trade, DomainError> {
        let trade = Trade::new(draft);
        self.store.add(trade.clone())?;
        info!(id = %trade.id, instrument = %trade.instrument, "trade logged");
        Ok(trade)
    }

    pub fn update(&self, trade: Trade) -> Result<Trade, DomainError> {
        self.store.update(trade.clone())?;
        Ok(trade)
    }

    pub fn close(&self, id: &str, result: f64, exit_price: Option<f64>) -> Result<Trade, DomainError> {
        let trade = self.store.close(id, result, exit_price)?;
        info!(id, result, "trade closed");
        Ok(trade)
    }

    pub fn remove(&self, id: &str) -> Result<Trade, DomainError> {
        self.store.remove(id)
    }

    pub fn get(&self, id: &str) -> Result<Trade, DomainError> {
        self.store
            .get(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))
    }

    pub fn list(&self, filter: &TradeFilter, limit: Option<usize>) -> Result<Vec<Trade>, DomainError> {
        self.list_at(filter, limit, Utc::now())
    }

    /// Matching trades, newest first.
    pub fn list_at(
        &self,
        filter: &TradeFilter,
        limit: Option<usize>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Trade>, DomainError> {
        let mut trades = filter.apply(&self.store.list()?, now);
        trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = limit {
            trades.truncate(limit);
        }
        Ok(trades)
    }
}
