//! Shared test helpers.

#![allow(dead_code)]

use std::sync::Arc;
use tradejournal::application::trade_codec;
use tradejournal::domain::entities::trade::TradeDraft;
use tradejournal::domain::ports::key_value_store::{KeyValueStore, TRADES_KEY};
use tradejournal::domain::values::trade_status::TradeStatus;
use tradejournal::domain::values::trade_type::TradeType;
use tradejournal::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use tradejournal::TradeJournal;

/// Fresh in-memory journal; the absent slot is filled with the seed trades.
pub fn setup() -> TradeJournal {
    TradeJournal::new(":memory:").unwrap()
}

/// In-memory journal whose slot holds an empty trade list.
pub fn empty() -> TradeJournal {
    let storage = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    storage
        .set(TRADES_KEY, &trade_codec::encode(&[]).unwrap())
        .unwrap();
    TradeJournal::with_storage(storage).unwrap()
}

pub fn closed_draft(instrument: &str, result: f64, emotion: &str, notes: &str) -> TradeDraft {
    TradeDraft {
        instrument: instrument.to_string(),
        trade_type: TradeType::Buy,
        lot_size: 1.0,
        entry_price: 100.0,
        stop_loss: 95.0,
        take_profit: 110.0,
        exit_price: Some(100.0 + result / 100.0),
        result,
        status: TradeStatus::Closed,
        notes: notes.to_string(),
        emotion: emotion.to_string(),
        mindset_before: String::new(),
        mindset_after: String::new(),
        open_date: None,
        close_date: None,
    }
}

pub fn open_draft(instrument: &str) -> TradeDraft {
    TradeDraft {
        status: TradeStatus::Open,
        exit_price: None,
        ..closed_draft(instrument, 0.0, "Neutral", "")
    }
}
