//! Authoritative in-memory trade list, mirrored to one storage slot.
//!
//! Every mutation is written to storage before it is committed in memory, so
//! a failed write leaves the list untouched. Subscribers are notified after
//! the commit, once the list lock has been released.

use crate::application::seed::seed_trades;
use crate::application::trade_codec::{self, Decoded};
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::key_value_store::{KeyValueStore, TRADES_KEY};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(String),
    Updated(String),
    Removed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

struct State {
    trades: Vec<Trade>,
    revision: u64,
}

pub struct TradeStore {
    storage: Arc<dyn KeyValueStore>,
    state: Mutex<State>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

impl TradeStore {
    /// Loads the slot, reseeding it when absent or unreadable.
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Result<Self, DomainError> {
        let trades = Self::load(storage.as_ref())?;
        Ok(Self {
            storage,
            state: Mutex::new(State { trades, revision: 0 }),
            listeners: Mutex::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
        })
    }

    fn load(storage: &dyn KeyValueStore) -> Result<Vec<Trade>, DomainError> {
        let raw = match storage.get(TRADES_KEY)? {
            Some(raw) => raw,
            None => {
                info!("no stored trades, seeding example data");
                return Self::reseed(storage);
            }
        };

        match trade_codec::decode(&raw) {
            Ok(Decoded::Current(trades)) => {
                debug!(count = trades.len(), "loaded trades");
                Ok(trades)
            }
            Ok(Decoded::Migrated {
                from_version,
                trades,
            }) => {
                info!(
                    from_version,
                    to_version = trade_codec::SCHEMA_VERSION,
                    count = trades.len(),
                    "migrated stored trades"
                );
                storage.set(TRADES_KEY, &trade_codec::encode(&trades)?)?;
                Ok(trades)
            }
            Err(e) => {
                warn!(error = %e, "discarding unreadable trade data");
                storage.remove(TRADES_KEY)?;
                Self::reseed(storage)
            }
        }
    }

    fn reseed(storage: &dyn KeyValueStore) -> Result<Vec<Trade>, DomainError> {
        let trades = seed_trades();
        storage.set(TRADES_KEY, &trade_codec::encode(&trades)?)?;
        Ok(trades)
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, State>, DomainError> {
        self.state
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    pub fn list(&self) -> Result<Vec<Trade>, DomainError> {
        Ok(self.lock_state()?.trades.clone())
    }

    /// Trades together with the revision they belong to.
    pub fn snapshot(&self) -> Result<(Vec<Trade>, u64), DomainError> {
        let state = self.lock_state()?;
        Ok((state.trades.clone(), state.revision))
    }

    /// Incremented on every committed mutation.
    pub fn revision(&self) -> Result<u64, DomainError> {
        Ok(self.lock_state()?.revision)
    }

    pub fn get(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        Ok(self.lock_state()?.trades.iter().find(|t| t.id == id).cloned())
    }

    pub fn add(&self, trade: Trade) -> Result<(), DomainError> {
        trade.validate()?;
        self.commit(|trades| {
            if trades.iter().any(|t| t.id == trade.id) {
                return Err(DomainError::InvalidInput(format!(
                    "Trade id already exists: {}",
                    trade.id
                )));
            }
            let event = StoreEvent::Added(trade.id.clone());
            trades.push(trade);
            Ok(((), event))
        })
    }

    /// Replaces the trade with the same id.
    pub fn update(&self, trade: Trade) -> Result<(), DomainError> {
        trade.validate()?;
        self.commit(|trades| {
            let slot = trades
                .iter_mut()
                .find(|t| t.id == trade.id)
                .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {}", trade.id)))?;
            let event = StoreEvent::Updated(trade.id.clone());
            *slot = trade;
            Ok(((), event))
        })
    }

    pub fn remove(&self, id: &str) -> Result<Trade, DomainError> {
        self.commit(|trades| {
            let idx = trades
                .iter()
                .position(|t| t.id == id)
                .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))?;
            let removed = trades.remove(idx);
            Ok((removed, StoreEvent::Removed(id.to_string())))
        })
    }

    /// Marks an open trade closed with its realised result.
    pub fn close(&self, id: &str, result: f64, exit_price: Option<f64>) -> Result<Trade, DomainError> {
        if !result.is_finite() || exit_price.is_some_and(|p| !p.is_finite()) {
            return Err(DomainError::InvalidInput("result and exit price must be finite".into()));
        }
        self.commit(|trades| {
            let trade = trades
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))?;
            if trade.is_closed() {
                return Err(DomainError::InvalidInput(format!("Trade already closed: {id}")));
            }
            trade.close(result, exit_price);
            Ok((trade.clone(), StoreEvent::Updated(id.to_string())))
        })
    }

    fn commit<T, F>(&self, mutate: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Vec<Trade>) -> Result<(T, StoreEvent), DomainError>,
    {
        let (value, event) = {
            let mut state = self.lock_state()?;
            let mut next = state.trades.clone();
            let (value, event) = mutate(&mut next)?;
            self.storage
                .set(TRADES_KEY, &trade_codec::encode(&next)?)?;
            state.trades = next;
            state.revision += 1;
            debug!(?event, revision = state.revision, "trade list committed");
            (value, event)
        };
        self.notify(&event);
        Ok(value)
    }

    /// Registers a change listener. Listeners must not subscribe or
    /// unsubscribe from inside the callback.
    pub fn subscribe(&self, listener: Listener) -> Result<SubscriptionId, DomainError> {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?
            .push((id, listener));
        Ok(id)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, DomainError> {
        let mut listeners = self
            .listeners
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        Ok(listeners.len() != before)
    }

    fn notify(&self, event: &StoreEvent) {
        match self.listeners.lock() {
            Ok(listeners) => {
                for (_, listener) in listeners.iter() {
                    listener(event);
                }
            }
            Err(e) => warn!(error = %e, "listener registry poisoned, change not broadcast"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        slots: Mutex<HashMap<String, String>>,
        fail_writes: std::sync::atomic::AtomicBool,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
            Ok(self.slots.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(DomainError::Database("disk full".into()));
            }
            self.slots
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), DomainError> {
            self.slots.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn empty_store() -> (Arc<MemoryStore>, TradeStore) {
        let storage = Arc::new(MemoryStore::default());
        storage.set(TRADES_KEY, &trade_codec::encode(&[]).unwrap()).unwrap();
        let store = TradeStore::open(storage.clone()).unwrap();
        (storage, store)
    }

    #[test]
    fn test_absent_slot_is_seeded_and_written_back() {
        let storage = Arc::new(MemoryStore::default());
        let store = TradeStore::open(storage.clone()).unwrap();
        assert_eq!(store.list().unwrap().len(), 4);
        let raw = storage.get(TRADES_KEY).unwrap().unwrap();
        assert_eq!(trade_codec::decode(&raw).unwrap().into_trades(), seed_trades());
    }

    #[test]
    fn test_corrupted_slot_is_replaced_by_seed() {
        let storage = Arc::new(MemoryStore::default());
        storage.set(TRADES_KEY, "{not json").unwrap();
        let store = TradeStore::open(storage.clone()).unwrap();
        assert_eq!(store.list().unwrap(), seed_trades());
        let raw = storage.get(TRADES_KEY).unwrap().unwrap();
        assert!(trade_codec::decode(&raw).is_ok());
    }

    #[test]
    fn test_mutations_persist_and_bump_revision() {
        let (storage, store) = empty_store();
        store.add(closed("a", "EUR/USD", 10.0, at(2024, 1, 1))).unwrap();
        store.add(open("b", "GBP/USD", at(2024, 1, 2))).unwrap();
        assert_eq!(store.revision().unwrap(), 2);

        let mut edited = store.get("a").unwrap().unwrap();
        edited.notes = "edited".into();
        store.update(edited).unwrap();
        store.remove("b").unwrap();

        let raw = storage.get(TRADES_KEY).unwrap().unwrap();
        let persisted = trade_codec::decode(&raw).unwrap().into_trades();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].notes, "edited");
        assert_eq!(store.revision().unwrap(), 4);
    }

    #[test]
    fn test_duplicate_and_missing_ids() {
        let (_, store) = empty_store();
        store.add(closed("a", "EUR/USD", 10.0, at(2024, 1, 1))).unwrap();
        assert!(matches!(
            store.add(closed("a", "EUR/USD", 5.0, at(2024, 1, 2))),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(matches!(store.remove("zzz"), Err(DomainError::NotFound(_))));
        assert!(matches!(
            store.update(closed("zzz", "EUR/USD", 1.0, at(2024, 1, 1))),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(store.revision().unwrap(), 1);
    }

    #[test]
    fn test_close_open_trade() {
        let (_, store) = empty_store();
        store.add(open("a", "EUR/USD", at(2024, 1, 1))).unwrap();
        let closed = store.close("a", 75.0, Some(101.0)).unwrap();
        assert!(closed.is_closed());
        assert_eq!(closed.result, 75.0);
        assert!(matches!(
            store.close("a", 1.0, None),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let (storage, store) = empty_store();
        storage.fail_writes.store(true, Ordering::SeqCst);
        assert!(store.add(closed("a", "EUR/USD", 10.0, at(2024, 1, 1))).is_err());
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.revision().unwrap(), 0);
    }

    #[test]
    fn test_subscribers_are_notified() {
        let (_, store) = empty_store();
        let seen: Arc<Mutex<Vec<StoreEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = store
            .subscribe(Box::new(move |e: &StoreEvent| sink.lock().unwrap().push(e.clone())))
            .unwrap();

        store.add(closed("a", "EUR/USD", 10.0, at(2024, 1, 1))).unwrap();
        store.remove("a").unwrap();
        assert!(store.unsubscribe(id).unwrap());
        store.add(closed("b", "EUR/USD", 10.0, at(2024, 1, 1))).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                StoreEvent::Added("a".into()),
                StoreEvent::Removed("a".into())
            ]
        );
        assert!(!store.unsubscribe(id).unwrap());
    }
}
