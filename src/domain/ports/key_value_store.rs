use crate::domain::error::DomainError;

/// Storage key holding the serialized trade list.
pub const TRADES_KEY: &str = "trading-journal-trades";

/// String-keyed storage slots, the host's local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
