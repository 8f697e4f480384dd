pub mod breakdown;
pub mod choice;
pub mod learning;
pub mod market_condition;
pub mod mood;
pub mod performance;
pub mod result_filter;
pub mod time_window;
pub mod trade_filter;
pub mod trade_status;
pub mod trade_type;
