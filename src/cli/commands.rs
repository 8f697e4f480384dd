use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradejournal", about = "Personal trading journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Trade list filters shared by `trades` and `export`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Case-insensitive text over notes, mindsets and instrument
    #[arg(long)]
    pub search: Option<String>,
    /// Instrument symbol, or "all"
    #[arg(long, default_value = "all")]
    pub instrument: String,
    /// Emotion label, or "all"
    #[arg(long, default_value = "all")]
    pub emotion: String,
    /// Result sign (all, profit, loss)
    #[arg(long, default_value = "all")]
    pub result: String,
    /// Closed trades only, within a window (7d, 30d, 90d, all)
    #[arg(long)]
    pub window: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a new trade
    Add {
        /// JSON with instrument, type, lot_size, entry_price, stop_loss, take_profit, result, status, notes, emotion, mindset_before, mindset_after
        json: String,
    },
    /// Replace a trade by id
    Update {
        /// Full trade JSON, including id and timestamp
        json: String,
    },
    /// Close an open trade
    Close {
        /// Trade ID
        id: String,
        /// Realised profit or loss
        #[arg(allow_hyphen_values = true)]
        result: f64,
        #[arg(long)]
        exit_price: Option<f64>,
    },
    /// Delete a trade
    Remove {
        /// Trade ID
        id: String,
    },
    /// Show one trade
    Show {
        /// Trade ID
        id: String,
    },
    /// List trades, newest first
    Trades {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Performance statistics over closed trades
    Stats {
        /// Time window (7d, 30d, 90d, all)
        #[arg(long, default_value = "all")]
        window: String,
    },
    /// Performance grouped by emotion, instrument, weekday or month
    Breakdown {
        dimension: String,
        #[arg(long, default_value = "all")]
        window: String,
    },
    /// Emotion ranking, learning points and recommendations
    Insights {
        #[arg(long, default_value = "all")]
        window: String,
    },
    /// Validate a daily journal entry
    Journal {
        /// JSON with date, mood, market_conditions, what_went_well, what_went_wrong, lessons_learned, tomorrow_focus, overall_reflection
        json: String,
    },
    /// Export matching trades as JSON
    Export {
        #[command(flatten)]
        filter: FilterArgs,
    },
}
