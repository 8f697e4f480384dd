use crate::domain::error::DomainError;
use crate::domain::values::trade_status::TradeStatus;
use crate::domain::values::trade_type::TradeType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trade {
    pub id: String,
    pub instrument: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub lot_size: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub exit_price: Option<f64>,
    /// Realised profit or loss.
    pub result: f64,
    pub status: TradeStatus,
    pub notes: String,
    pub emotion: String,
    pub mindset_before: String,
    pub mindset_after: String,
    pub timestamp: DateTime<Utc>,
    pub open_date: DateTime<Utc>,
    pub close_date: Option<DateTime<Utc>>,
}

/// User-submitted fields of a new trade. Identity and timestamp are assigned
/// by [`Trade::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDraft {
    pub instrument: String,
    #[serde(rename = "type")]
    pub trade_type: TradeType,
    pub lot_size: f64,
    pub entry_price: f64,
    #[serde(default)]
    pub stop_loss: f64,
    #[serde(default)]
    pub take_profit: f64,
    #[serde(default)]
    pub exit_price: Option<f64>,
    #[serde(default)]
    pub result: f64,
    #[serde(default = "default_status")]
    pub status: TradeStatus,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub mindset_before: String,
    #[serde(default)]
    pub mindset_after: String,
    #[serde(default)]
    pub open_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub close_date: Option<DateTime<Utc>>,
}

fn default_status() -> TradeStatus {
    TradeStatus::Open
}

impl Trade {
    pub fn new(draft: TradeDraft) -> Self {
        let now = Utc::now();
        let close_date = match draft.status {
            TradeStatus::Closed => draft.close_date.or(Some(now)),
            TradeStatus::Open => draft.close_date,
        };
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            instrument: draft.instrument,
            trade_type: draft.trade_type,
            lot_size: draft.lot_size,
            entry_price: draft.entry_price,
            stop_loss: draft.stop_loss,
            take_profit: draft.take_profit,
            exit_price: draft.exit_price,
            result: draft.result,
            status: draft.status,
            notes: draft.notes,
            emotion: draft.emotion,
            mindset_before: draft.mindset_before,
            mindset_after: draft.mindset_after,
            timestamp: now,
            open_date: draft.open_date.unwrap_or(now),
            close_date,
        }
    }

    pub fn close(&mut self, result: f64, exit_price: Option<f64>) {
        self.status = TradeStatus::Closed;
        self.result = result;
        if exit_price.is_some() {
            self.exit_price = exit_price;
        }
        self.close_date = Some(Utc::now());
    }

    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    pub fn is_win(&self) -> bool {
        self.result > 0.0
    }

    pub fn is_loss(&self) -> bool {
        self.result < 0.0
    }

    /// Checks the fields a stored or submitted trade must satisfy.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidInput("trade id is empty".into()));
        }
        if self.instrument.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!(
                "trade {} has no instrument",
                self.id
            )));
        }
        let numbers = [
            ("lot_size", self.lot_size),
            ("entry_price", self.entry_price),
            ("stop_loss", self.stop_loss),
            ("take_profit", self.take_profit),
            ("result", self.result),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "trade {} has non-finite {name}",
                    self.id
                )));
            }
        }
        if let Some(exit) = self.exit_price {
            if !exit.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "trade {} has non-finite exit_price",
                    self.id
                )));
            }
        }
        Ok(())
    }

    /// Free-text fields matched by search, each on its own.
    pub fn text_fields(&self) -> [&str; 4] {
        [
            self.notes.as_str(),
            self.mindset_before.as_str(),
            self.mindset_after.as_str(),
            self.instrument.as_str(),
        ]
    }
}
