//! Transactions for tests.

use time::{Duration, macros::datetime};

use crate::transaction::{Amount, Direction, Transaction};

/// An inbound transaction with the given kobo amount.
pub(crate) fn inbound(id: &str, kobo: i64) -> Transaction {
    Transaction::build(id, Amount::from_kobo(kobo), Direction::Inbound).finalise()
}

/// An outbound transaction with the given kobo amount.
pub(crate) fn outbound(id: &str, kobo: i64) -> Transaction {
    Transaction::build(id, Amount::from_kobo(kobo), Direction::Outbound).finalise()
}

/// A small, varied wallet history, one transaction per day from 1 Oct 2025.
///
/// | id | direction | category  | description            | kobo    |
/// |----|-----------|-----------|------------------------|---------|
/// | 1  | inbound   | Salary    | October salary         | 500000  |
/// | 2  | outbound  | Rent      | Apartment Rent - Lagos | 200000  |
/// | 3  | outbound  | Food      | Groceries at Shoprite  | 15000   |
/// | 4  | outbound  | Transport | Bolt ride              | 3500    |
/// | 5  | inbound   | Gifts     | Birthday gift          | 20000   |
/// | 6  | outbound  | Food      | Suya                   | 2500    |
pub(crate) fn sample_transactions() -> Vec<Transaction> {
    let start = datetime!(2025-10-01 12:00 UTC);
    let rows = [
        ("1", Direction::Inbound, "Salary", "October salary", 500_000),
        ("2", Direction::Outbound, "Rent", "Apartment Rent - Lagos", 200_000),
        ("3", Direction::Outbound, "Food", "Groceries at Shoprite", 15_000),
        ("4", Direction::Outbound, "Transport", "Bolt ride", 3_500),
        ("5", Direction::Inbound, "Gifts", "Birthday gift", 20_000),
        ("6", Direction::Outbound, "Food", "Suya", 2_500),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(day, (id, direction, category, description, kobo))| {
            Transaction::build(id, Amount::from_kobo(kobo), direction)
                .category(category)
                .description(description)
                .timestamp(start + Duration::days(day as i64))
                .finalise()
        })
        .collect()
}

/// The backend's JSON for [sample_transactions], wrapped in a `data` envelope.
///
/// Transaction 4 is pending, the rest succeeded.
pub(crate) fn sample_backend_body() -> String {
    serde_json::json!({
        "data": [
            {"id": "1", "type": "DEPOSIT", "category": "Salary", "description": "October salary", "amount": 500000, "timestamp": "2025-10-01T12:00:00Z", "status": "success"},
            {"id": "2", "type": "EXPENSE", "category": "Rent", "description": "Apartment Rent - Lagos", "amount": 200000, "timestamp": "2025-10-02T12:00:00Z", "status": "success"},
            {"id": "3", "type": "WITHDRAWAL", "category": "Food", "description": "Groceries at Shoprite", "amount": 15000, "timestamp": "2025-10-03T12:00:00Z", "status": "success"},
            {"id": "4", "type": "EXPENSE", "category": "Transport", "description": "Bolt ride", "amount": 3500, "timestamp": "2025-10-04T12:00:00Z", "status": "pending"},
            {"id": "5", "type": "TRANSFER", "originalType": "CREDIT", "category": "Gifts", "description": "Birthday gift", "amount": 20000, "timestamp": "2025-10-05T12:00:00Z", "status": "success"},
            {"id": 6, "type": "DEBIT", "category": "Food", "description": "Suya", "amount": 2500, "timestamp": "2025-10-06T12:00:00Z", "status": "success"}
        ]
    })
    .to_string()
}

/// The backend's JSON for `count` outbound transactions, one minute apart.
pub(crate) fn many_backend_body(count: usize) -> String {
    let transactions: Vec<serde_json::Value> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": format!("tx-{i}"),
                "type": "EXPENSE",
                "category": "Food",
                "description": format!("Purchase {i}"),
                "amount": 100,
                "timestamp": format!("2025-10-01T12:{:02}:00Z", i % 60),
                "status": "success"
            })
        })
        .collect();

    serde_json::Value::Array(transactions).to_string()
}
