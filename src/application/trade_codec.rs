//! Serialized form of the trade list held in the storage slot.
//!
//! Current layout is a versioned envelope, `{"version": 1, "trades": [...]}`,
//! validated strictly. A bare JSON array is the version 0 layout written by
//! the browser dashboard: camelCase keys, optional fields, numbers that may
//! arrive as strings and dates as text. Version 0 is migrated on decode.

use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::values::trade_status::TradeStatus;
use crate::domain::values::trade_type::TradeType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    version: u32,
    trades: Vec<Trade>,
}

#[derive(Debug, PartialEq)]
pub enum Decoded {
    Current(Vec<Trade>),
    Migrated { from_version: u32, trades: Vec<Trade> },
}

impl Decoded {
    pub fn into_trades(self) -> Vec<Trade> {
        match self {
            Decoded::Current(trades) => trades,
            Decoded::Migrated { trades, .. } => trades,
        }
    }
}

pub fn encode(trades: &[Trade]) -> Result<String, DomainError> {
    #[derive(Serialize)]
    struct EnvelopeRef<'a> {
        version: u32,
        trades: &'a [Trade],
    }
    Ok(serde_json::to_string(&EnvelopeRef {
        version: SCHEMA_VERSION,
        trades,
    })?)
}

pub fn decode(raw: &str) -> Result<Decoded, DomainError> {
    let value: Value = serde_json::from_str(raw)?;
    let decoded = match value {
        Value::Array(items) => Decoded::Migrated {
            from_version: 0,
            trades: items
                .into_iter()
                .enumerate()
                .map(|(i, item)| migrate_v0(i, item))
                .collect::<Result<Vec<_>, _>>()?,
        },
        Value::Object(map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| DomainError::Parse("missing schema version".into()))?;
            if version != SCHEMA_VERSION as u64 {
                return Err(DomainError::Parse(format!(
                    "unsupported schema version {version}"
                )));
            }
            let envelope: Envelope = serde_json::from_value(Value::Object(map))?;
            Decoded::Current(envelope.trades)
        }
        _ => {
            return Err(DomainError::Parse(
                "expected a trade array or a versioned envelope".into(),
            ))
        }
    };

    validate(match &decoded {
        Decoded::Current(trades) => trades,
        Decoded::Migrated { trades, .. } => trades,
    })?;
    Ok(decoded)
}

fn validate(trades: &[Trade]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for trade in trades {
        trade.validate()?;
        if !seen.insert(trade.id.as_str()) {
            return Err(DomainError::Parse(format!("duplicate trade id {}", trade.id)));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyTrade {
    id: Option<Value>,
    instrument: Option<String>,
    #[serde(rename = "type")]
    trade_type: Option<String>,
    lot_size: Option<Value>,
    entry_price: Option<Value>,
    stop_loss: Option<Value>,
    take_profit: Option<Value>,
    exit_price: Option<Value>,
    result: Option<Value>,
    status: Option<String>,
    notes: Option<String>,
    emotion: Option<String>,
    mindset_before: Option<String>,
    mindset_after: Option<String>,
    timestamp: Option<Value>,
    open_date: Option<Value>,
    close_date: Option<Value>,
}

fn migrate_v0(index: usize, item: Value) -> Result<Trade, DomainError> {
    let legacy: LegacyTrade = serde_json::from_value(item)
        .map_err(|e| DomainError::Parse(format!("legacy trade #{index}: {e}")))?;
    let err = |what: &str| DomainError::Parse(format!("legacy trade #{index}: {what}"));

    let id = match legacy.id {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(err("missing id")),
    };
    let trade_type: TradeType = legacy
        .trade_type
        .as_deref()
        .ok_or_else(|| err("missing type"))?
        .parse()
        .map_err(|e: String| err(&e))?;

    let timestamp = loose_date(legacy.timestamp.as_ref())
        .or_else(|| loose_date(legacy.open_date.as_ref()))
        .ok_or_else(|| err("missing or invalid timestamp"))?;
    let open_date = loose_date(legacy.open_date.as_ref()).unwrap_or(timestamp);
    let close_date = loose_date(legacy.close_date.as_ref());
    let exit_price = legacy.exit_price.as_ref().and_then(loose_f64);

    let status = match legacy.status.as_deref() {
        Some(s) => s.parse().map_err(|e: String| err(&e))?,
        None if close_date.is_some() || exit_price.is_some() => TradeStatus::Closed,
        None => TradeStatus::Open,
    };

    Ok(Trade {
        id,
        instrument: legacy.instrument.unwrap_or_default().trim().to_string(),
        trade_type,
        lot_size: number(legacy.lot_size.as_ref()),
        entry_price: number(legacy.entry_price.as_ref()),
        stop_loss: number(legacy.stop_loss.as_ref()),
        take_profit: number(legacy.take_profit.as_ref()),
        exit_price,
        result: number(legacy.result.as_ref()),
        status,
        notes: legacy.notes.unwrap_or_default(),
        emotion: legacy.emotion.unwrap_or_default(),
        mindset_before: legacy.mindset_before.unwrap_or_default(),
        mindset_after: legacy.mindset_after.unwrap_or_default(),
        timestamp,
        open_date,
        close_date,
    })
}

fn number(value: Option<&Value>) -> f64 {
    value.and_then(loose_f64).unwrap_or(0.0)
}

/// Accepts JSON numbers and numeric strings.
fn loose_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts RFC 3339 text, bare `YYYY-MM-DD` dates and epoch milliseconds.
fn loose_date(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
