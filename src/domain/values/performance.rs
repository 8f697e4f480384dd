//! Summary statistics over closed trades.
//!
//! Every function here ignores open trades: a trade only counts once its
//! result is realised. A trade with a zero result is neither a win nor a
//! loss, and it breaks both streak counters.

use crate::domain::entities::trade::Trade;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub total_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub breakeven_trades: usize,
    /// Percentage (0–100) of trades with a positive result.
    pub win_rate: f64,
    pub total_pnl: f64,
    pub average_win: f64,
    /// Magnitude of the average losing result.
    pub average_loss: f64,
    pub largest_win: f64,
    pub largest_loss: f64,
    pub profit_factor: f64,
    pub max_consecutive_wins: usize,
    pub max_consecutive_losses: usize,
}

/// Longest winning and losing runs in chronological order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Streaks {
    pub max_wins: usize,
    pub max_losses: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub trade_id: String,
    pub timestamp: DateTime<Utc>,
    pub result: f64,
    pub cumulative_pnl: f64,
}

impl PerformanceSummary {
    pub fn from_trades(trades: &[Trade]) -> Self {
        let closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
        if closed.is_empty() {
            return Self::default();
        }

        let wins: Vec<f64> = closed.iter().filter(|t| t.is_win()).map(|t| t.result).collect();
        let losses: Vec<f64> = closed
            .iter()
            .filter(|t| t.is_loss())
            .map(|t| t.result.abs())
            .collect();

        let total_trades = closed.len();
        let average_win = mean(&wins);
        let average_loss = mean(&losses);
        let streaks = streaks(trades);

        Self {
            total_trades,
            winning_trades: wins.len(),
            losing_trades: losses.len(),
            breakeven_trades: total_trades - wins.len() - losses.len(),
            win_rate: wins.len() as f64 / total_trades as f64 * 100.0,
            total_pnl: closed.iter().map(|t| t.result).sum(),
            average_win,
            average_loss,
            largest_win: wins.iter().copied().fold(0.0, f64::max),
            largest_loss: losses.iter().copied().fold(0.0, f64::max),
            profit_factor: profit_factor(average_win, wins.len(), average_loss, losses.len()),
            max_consecutive_wins: streaks.max_wins,
            max_consecutive_losses: streaks.max_losses,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// `(average_win × wins) / (average_loss × losses)`.
///
/// Returns 0 when there are no losing trades, whatever the win count.
pub fn profit_factor(average_win: f64, wins: usize, average_loss: f64, losses: usize) -> f64 {
    if losses == 0 {
        return 0.0;
    }
    let gross_loss = average_loss * losses as f64;
    if gross_loss == 0.0 {
        return 0.0;
    }
    (average_win * wins as f64) / gross_loss
}

/// Scans closed trades in ascending timestamp order and keeps the longest
/// run of wins and of losses.
pub fn streaks(trades: &[Trade]) -> Streaks {
    let mut closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
    closed.sort_by_key(|t| t.timestamp);

    let mut result = Streaks::default();
    let mut current_wins = 0usize;
    let mut current_losses = 0usize;

    for trade in closed {
        if trade.is_win() {
            current_wins += 1;
            current_losses = 0;
            result.max_wins = result.max_wins.max(current_wins);
        } else if trade.is_loss() {
            current_losses += 1;
            current_wins = 0;
            result.max_losses = result.max_losses.max(current_losses);
        } else {
            current_wins = 0;
            current_losses = 0;
        }
    }

    result
}

/// Running P&L over closed trades in chronological order.
pub fn equity_curve(trades: &[Trade]) -> Vec<EquityPoint> {
    let mut closed: Vec<&Trade> = trades.iter().filter(|t| t.is_closed()).collect();
    closed.sort_by_key(|t| t.timestamp);

    let mut cumulative = 0.0;
    closed
        .into_iter()
        .map(|t| {
            cumulative += t.result;
            EquityPoint {
                trade_id: t.id.clone(),
                timestamp: t.timestamp,
                result: t.result,
                cumulative_pnl: cumulative,
            }
        })
        .collect()
}
