mod common;

use common::{closed_draft, open_draft};
use std::sync::Arc;
use tradejournal::application::seed::seed_trades;
use tradejournal::application::trade_codec::{self, Decoded};
use tradejournal::domain::ports::key_value_store::{KeyValueStore, TRADES_KEY};
use tradejournal::domain::values::trade_filter::TradeFilter;
use tradejournal::infrastructure::sqlite::kv_store::SqliteKeyValueStore;
use tradejournal::TradeJournal;

fn all(tj: &TradeJournal) -> Vec<tradejournal::domain::entities::trade::Trade> {
    let mut trades = tj.trade_list(&TradeFilter::default(), None).unwrap();
    trades.sort_by(|a, b| a.id.cmp(&b.id));
    trades
}

#[test]
fn test_trades_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");
    let path = path.to_str().unwrap();

    let before = {
        let tj = TradeJournal::new(path).unwrap();
        let added = tj
            .trade_add(closed_draft("EUR/USD", 250.0, "Calm", "Lesson: size down"))
            .unwrap();
        let open = tj.trade_add(open_draft("XAU/USD")).unwrap();
        tj.trade_close(&open.id, -40.0, Some(2030.0)).unwrap();
        tj.trade_remove("seed-4").unwrap();
        assert!(all(&tj).iter().any(|t| t.id == added.id));
        all(&tj)
    };

    let tj = TradeJournal::new(path).unwrap();
    let after = all(&tj);
    assert_eq!(after, before);
    assert_eq!(after.len(), 5);
    // Dates are reconstructed to full precision.
    for (a, b) in after.iter().zip(before.iter()) {
        assert_eq!(a.timestamp, b.timestamp);
        assert_eq!(a.close_date, b.close_date);
    }
}

#[test]
fn test_absent_slot_seeds_and_writes_back() {
    let storage = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    let tj = TradeJournal::with_storage(storage.clone()).unwrap();
    assert_eq!(all(&tj).len(), 4);

    let raw = storage.get(TRADES_KEY).unwrap().expect("seed written back");
    assert_eq!(
        trade_codec::decode(&raw).unwrap(),
        Decoded::Current(seed_trades())
    );
}

#[test]
fn test_corrupted_slot_falls_back_to_seed() {
    let storage = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    storage.set(TRADES_KEY, "[{\"id\": \"1\", broken").unwrap();

    let tj = TradeJournal::with_storage(storage.clone()).unwrap();
    let mut expected = seed_trades();
    expected.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(all(&tj), expected);

    let raw = storage.get(TRADES_KEY).unwrap().unwrap();
    assert!(matches!(trade_codec::decode(&raw), Ok(Decoded::Current(_))));
}

#[test]
fn test_unknown_schema_version_falls_back_to_seed() {
    let storage = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    storage
        .set(TRADES_KEY, r#"{"version": 99, "trades": []}"#)
        .unwrap();
    let tj = TradeJournal::with_storage(storage).unwrap();
    assert_eq!(all(&tj).len(), 4);
}

#[test]
fn test_legacy_array_is_migrated_and_rewritten() {
    let storage = Arc::new(SqliteKeyValueStore::open(":memory:").unwrap());
    storage
        .set(
            TRADES_KEY,
            r#"[{
                "id": "1705311000000",
                "instrument": "EUR/USD",
                "type": "sell",
                "lotSize": 2,
                "entryPrice": "1.0900",
                "stopLoss": 1.093,
                "takeProfit": 1.084,
                "result": -60,
                "status": "closed",
                "notes": "Avoid fading strong trends",
                "emotion": "Greedy",
                "mindsetBefore": "",
                "mindsetAfter": "",
                "timestamp": "2024-02-01T10:00:00.000Z"
            }]"#,
        )
        .unwrap();

    let tj = TradeJournal::with_storage(storage.clone()).unwrap();
    let trades = all(&tj);
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].entry_price, 1.09);
    assert_eq!(trades[0].lot_size, 2.0);
    assert!(trades[0].is_loss());

    let raw = storage.get(TRADES_KEY).unwrap().unwrap();
    assert_eq!(trade_codec::decode(&raw).unwrap(), Decoded::Current(trades));
}
