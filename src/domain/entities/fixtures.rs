//! Trade builders shared by unit tests.

use crate::domain::entities::trade::Trade;
use crate::domain::values::trade_status::TradeStatus;
use crate::domain::values::trade_type::TradeType;
use chrono::{DateTime, TimeZone, Utc};

pub fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn closed(id: &str, instrument: &str, result: f64, ts: DateTime<Utc>) -> Trade {
    Trade {
        id: id.to_string(),
        instrument: instrument.to_string(),
        trade_type: TradeType::Buy,
        lot_size: 1.0,
        entry_price: 100.0,
        stop_loss: 95.0,
        take_profit: 110.0,
        exit_price: Some(100.0 + result / 10.0),
        result,
        status: TradeStatus::Closed,
        notes: String::new(),
        emotion: String::new(),
        mindset_before: String::new(),
        mindset_after: String::new(),
        timestamp: ts,
        open_date: ts,
        close_date: Some(ts),
    }
}

pub fn open(id: &str, instrument: &str, ts: DateTime<Utc>) -> Trade {
    Trade {
        status: TradeStatus::Open,
        exit_price: None,
        close_date: None,
        ..closed(id, instrument, 0.0, ts)
    }
}

pub fn with_emotion(mut trade: Trade, emotion: &str) -> Trade {
    trade.emotion = emotion.to_string();
    trade
}

pub fn with_notes(mut trade: Trade, notes: &str) -> Trade {
    trade.notes = notes.to_string();
    trade
}
