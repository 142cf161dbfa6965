// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use spendlog::ledger::LedgerStore;
use spendlog::models::{Category, ExpenseDraft, PaymentMethod};
use spendlog::reports::total_of;
use spendlog::utils::parse_date;

const DDL: &str = "CREATE TABLE IF NOT EXISTS slots(key TEXT PRIMARY KEY, value TEXT NOT NULL);";

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(DDL).unwrap();
    conn
}

fn draft(date: &str, amount: &str) -> ExpenseDraft {
    ExpenseDraft {
        date: Some(parse_date(date).unwrap()),
        amount: Some(amount.parse::<Decimal>().unwrap()),
        ..Default::default()
    }
}

#[test]
fn add_assigns_unique_ids_and_prepends() {
    let mut store = LedgerStore::open(setup());
    let first = store.add(draft("2025-01-01", "10")).unwrap().unwrap();
    let second = store.add(draft("2025-01-02", "20")).unwrap().unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(store.len(), 2);
    // newest insertion first, regardless of date
    assert_eq!(store.records()[0].id, second.id);
    assert_eq!(store.records()[1].id, first.id);
}

#[test]
fn add_applies_category_and_method_defaults() {
    let mut store = LedgerStore::open(setup());
    let record = store.add(draft("2025-01-01", "10")).unwrap().unwrap();
    assert_eq!(record.category, Category::Food);
    assert_eq!(record.payment_method, PaymentMethod::Cash);
    assert_eq!(record.date, "2025-01-01");
}

#[test]
fn add_without_amount_is_rejected() {
    let mut store = LedgerStore::open(setup());
    store.add(draft("2025-01-01", "10")).unwrap();
    let total = total_of(store.records());
    let result = store
        .add(ExpenseDraft {
            date: Some(parse_date("2025-01-02").unwrap()),
            ..Default::default()
        })
        .unwrap();
    assert!(result.is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(total_of(store.records()), total);
}

#[test]
fn add_without_date_is_rejected() {
    let mut store = LedgerStore::open(setup());
    let result = store
        .add(ExpenseDraft {
            amount: Some("5".parse().unwrap()),
            ..Default::default()
        })
        .unwrap();
    assert!(result.is_none());
    assert!(store.is_empty());
}

#[test]
fn add_negative_amount_is_rejected() {
    let mut store = LedgerStore::open(setup());
    let result = store.add(draft("2025-01-01", "-5")).unwrap();
    assert!(result.is_none());
    assert!(store.is_empty());
}

#[test]
fn add_zero_amount_is_stored() {
    let mut store = LedgerStore::open(setup());
    let record = store.add(draft("2025-01-01", "0")).unwrap().unwrap();
    assert_eq!(record.amount, Decimal::ZERO);
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_restores_pre_add_state() {
    let mut store = LedgerStore::open(setup());
    let a = store.add(draft("2025-01-01", "10")).unwrap().unwrap();
    let b = store.add(draft("2025-01-02", "20")).unwrap().unwrap();
    let total = total_of(store.records());

    let c = store.add(draft("2025-01-03", "30")).unwrap().unwrap();
    assert!(store.remove(&c.id).unwrap());

    assert_eq!(store.len(), 2);
    assert_eq!(total_of(store.records()), total);
    let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![b.id.as_str(), a.id.as_str()]);
}

#[test]
fn remove_absent_id_is_idempotent() {
    let mut store = LedgerStore::open(setup());
    store.add(draft("2025-01-01", "10")).unwrap();
    assert!(!store.remove("no-such-id").unwrap());
    assert!(!store.remove("no-such-id").unwrap());
    assert_eq!(store.len(), 1);
}

#[test]
fn missing_slot_loads_empty() {
    let store = LedgerStore::open(setup());
    assert!(store.is_empty());
}

#[test]
fn uninitialized_database_loads_empty() {
    // no slots table at all; the read fails soft
    let conn = Connection::open_in_memory().unwrap();
    let store = LedgerStore::open(conn);
    assert!(store.is_empty());
}

#[test]
fn malformed_slot_loads_empty() {
    let conn = setup();
    conn.execute(
        "INSERT INTO slots(key,value) VALUES('expenses','{not json')",
        [],
    )
    .unwrap();
    let store = LedgerStore::open(conn);
    assert!(store.is_empty());
}

#[test]
fn unknown_category_string_in_slot_loads_empty() {
    let conn = setup();
    conn.execute(
        "INSERT INTO slots(key,value) VALUES('expenses', ?1)",
        [r#"[{"id":"1","date":"2024-01-01","amount":5,"category":"Gambling","description":"","paymentMethod":"Cash"}]"#],
    )
    .unwrap();
    let store = LedgerStore::open(conn);
    assert!(store.is_empty());
}

#[test]
fn persisted_snapshot_roundtrips_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendlog.sqlite");
    let open = || {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(DDL).unwrap();
        LedgerStore::open(conn)
    };

    let mut store = open();
    store.add(draft("2024-03-05", "50")).unwrap();
    let mut with_extras = draft("2024-04-01", "12.34");
    with_extras.category = Some(Category::Transport);
    with_extras.payment_method = Some(PaymentMethod::UpiDigital);
    with_extras.description = "bus pass".to_string();
    store.add(with_extras).unwrap();
    let snapshot = store.records().to_vec();
    drop(store);

    let reopened = open();
    assert_eq!(reopened.records(), &snapshot[..]);
}

#[test]
fn mutation_overwrites_garbage_slot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendlog.sqlite");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(DDL).unwrap();
        conn.execute(
            "INSERT INTO slots(key,value) VALUES('expenses','garbage')",
            [],
        )
        .unwrap();
    }
    {
        let conn = Connection::open(&path).unwrap();
        let mut store = LedgerStore::open(conn);
        assert!(store.is_empty());
        store.add(draft("2025-02-01", "7")).unwrap();
    }
    let conn = Connection::open(&path).unwrap();
    let store = LedgerStore::open(conn);
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].date, "2025-02-01");
}
