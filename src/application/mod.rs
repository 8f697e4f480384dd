pub mod insights;
pub mod journal;
pub mod seed;
pub mod stats;
pub mod trade;
pub mod trade_codec;
pub mod trade_store;
