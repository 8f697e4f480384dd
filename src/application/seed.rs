use crate::domain::entities::trade::Trade;
use crate::domain::values::trade_status::TradeStatus;
use crate::domain::values::trade_type::TradeType;
use chrono::{DateTime, TimeZone, Utc};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

/// Example trades written to an empty or unreadable storage slot.
pub fn seed_trades() -> Vec<Trade> {
    vec![
        Trade {
            id: "seed-1".into(),
            instrument: "EUR/USD".into(),
            trade_type: TradeType::Buy,
            lot_size: 1.0,
            entry_price: 1.0850,
            stop_loss: 1.0820,
            take_profit: 1.0910,
            exit_price: Some(1.0875),
            result: 250.0,
            status: TradeStatus::Closed,
            notes: "Clean breakout above resistance. Followed my plan.".into(),
            emotion: "Confident".into(),
            mindset_before: "Calm and focused after reviewing the levels".into(),
            mindset_after: "Satisfied with the execution".into(),
            timestamp: utc(2024, 1, 15, 9, 30),
            open_date: utc(2024, 1, 15, 9, 30),
            close_date: Some(utc(2024, 1, 15, 14, 0)),
        },
        Trade {
            id: "seed-2".into(),
            instrument: "GBP/USD".into(),
            trade_type: TradeType::Sell,
            lot_size: 0.5,
            entry_price: 1.2700,
            stop_loss: 1.2730,
            take_profit: 1.2640,
            exit_price: Some(1.2730),
            result: -150.0,
            status: TradeStatus::Closed,
            notes: "Entered before confirmation. Lesson: wait for the candle close.".into(),
            emotion: "Anxious".into(),
            mindset_before: "Impatient after missing the morning move".into(),
            mindset_after: "Frustrated, need to avoid chasing entries".into(),
            timestamp: utc(2024, 1, 16, 10, 15),
            open_date: utc(2024, 1, 16, 10, 15),
            close_date: Some(utc(2024, 1, 16, 11, 5)),
        },
        Trade {
            id: "seed-3".into(),
            instrument: "USD/JPY".into(),
            trade_type: TradeType::Buy,
            lot_size: 1.0,
            entry_price: 148.20,
            stop_loss: 147.80,
            take_profit: 149.00,
            exit_price: Some(148.72),
            result: 520.0,
            status: TradeStatus::Closed,
            notes: "Patient entry on the pullback to support.".into(),
            emotion: "Disciplined".into(),
            mindset_before: "Waited for my setup".into(),
            mindset_after: "Confident in the process".into(),
            timestamp: utc(2024, 1, 17, 8, 0),
            open_date: utc(2024, 1, 17, 8, 0),
            close_date: Some(utc(2024, 1, 17, 16, 45)),
        },
        Trade {
            id: "seed-4".into(),
            instrument: "XAU/USD".into(),
            trade_type: TradeType::Buy,
            lot_size: 0.2,
            entry_price: 2035.50,
            stop_loss: 2025.00,
            take_profit: 2060.00,
            exit_price: None,
            result: 0.0,
            status: TradeStatus::Open,
            notes: "Holding into the FOMC statement.".into(),
            emotion: "Neutral".into(),
            mindset_before: "Cautious ahead of the news".into(),
            mindset_after: String::new(),
            timestamp: utc(2024, 1, 18, 13, 0),
            open_date: utc(2024, 1, 18, 13, 0),
            close_date: None,
        },
    ]
}
