pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::insights::{InsightsUseCase, PsychologyInsights};
use crate::application::journal::JournalUseCase;
use crate::application::stats::{PerformanceReport, StatsUseCase};
use crate::application::trade::TradeUseCase;
use crate::application::trade_store::{Listener, SubscriptionId, TradeStore};
use crate::domain::entities::journal_entry::{JournalEntry, JournalEntryDraft};
use crate::domain::entities::trade::{Trade, TradeDraft};
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::KeyValueStore;
use crate::domain::values::breakdown::{Dimension, GroupStats};
use crate::domain::values::time_window::TimeWindow;
use crate::domain::values::trade_filter::TradeFilter;
use crate::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use std::sync::Arc;

pub struct TradeJournal {
    store: Arc<TradeStore>,
    trade_uc: TradeUseCase,
    stats_uc: StatsUseCase,
    insights_uc: InsightsUseCase,
    journal_uc: JournalUseCase,
}

impl TradeJournal {
    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::open(db_path)?);
        Self::with_storage(storage)
    }

    pub fn with_storage(storage: Arc<dyn KeyValueStore>) -> Result<Self, DomainError> {
        let store = Arc::new(TradeStore::open(storage)?);
        Ok(Self {
            trade_uc: TradeUseCase::new(store.clone()),
            stats_uc: StatsUseCase::new(store.clone()),
            insights_uc: InsightsUseCase::new(store.clone()),
            journal_uc: JournalUseCase::new(),
            store,
        })
    }

    pub fn subscribe(&self, listener: Listener) -> Result<SubscriptionId, DomainError> {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, DomainError> {
        self.store.unsubscribe(id)
    }

    // Delegating methods
    pub fn trade_add(&self, draft: TradeDraft) -> Result<Trade, DomainError> {
        self.trade_uc.add(draft)
    }

    pub fn trade_update(&self, trade: Trade) -> Result<Trade, DomainError> {
        self.trade_uc.update(trade)
    }

    pub fn trade_close(&self, id: &str, result: f64, exit_price: Option<f64>) -> Result<Trade, DomainError> {
        self.trade_uc.close(id, result, exit_price)
    }

    pub fn trade_remove(&self, id: &str) -> Result<Trade, DomainError> {
        self.trade_uc.remove(id)
    }

    pub fn trade_get(&self, id: &str) -> Result<Trade, DomainError> {
        self.trade_uc.get(id)
    }

    pub fn trade_list(&self, filter: &TradeFilter, limit: Option<usize>) -> Result<Vec<Trade>, DomainError> {
        self.trade_uc.list(filter, limit)
    }

    pub fn stats(&self, window: TimeWindow) -> Result<Arc<PerformanceReport>, DomainError> {
        self.stats_uc.report(window)
    }

    pub fn breakdown(&self, dimension: Dimension, window: TimeWindow) -> Result<Vec<GroupStats>, DomainError> {
        self.stats_uc.breakdown(dimension, window)
    }

    pub fn insights(&self, window: TimeWindow) -> Result<PsychologyInsights, DomainError> {
        self.insights_uc.insights(window)
    }

    pub fn journal_submit(&self, draft: &JournalEntryDraft) -> Result<JournalEntry, DomainError> {
        self.journal_uc.submit(draft)
    }

    pub fn journal_entries(&self) -> Result<Vec<JournalEntry>, DomainError> {
        self.journal_uc.entries()
    }
}
