//! Shared test harness for invoice store testing
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod invoice_store_tests;

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use spool_invoice::core::{Invoice, NewInvoice, SpoolType};

/// Fixed instant used by tests that pin the clock
pub const BASE_MILLIS: i64 = 1_718_000_000_000;

/// Build an invoice stamped at `BASE_MILLIS + offset`
pub fn sample_invoice(offset: i64, client: &str, spool_type: SpoolType) -> Invoice {
    let input = NewInvoice {
        client_name: client.to_string(),
        client_email: format!("{}@example.com", client.to_lowercase()),
        spool_type,
        price_per_pound: 4.25,
        quantity: 2,
    };
    Invoice::issue(input, Utc.timestamp_millis_opt(BASE_MILLIS + offset).unwrap())
}

/// The reference create request: 44lb spools at 10/lb, quantity 2
pub fn acme_payload() -> Value {
    json!({
        "clientName": "Acme",
        "clientEmail": "a@b.com",
        "spoolType": "44lb",
        "pricePerPound": 10,
        "quantity": 2
    })
}

/// `acme_payload` without one field
pub fn acme_payload_without(field: &str) -> Value {
    let mut payload = acme_payload();
    if let Some(map) = payload.as_object_mut() {
        map.remove(field);
    }
    payload
}

/// `acme_payload` with one field replaced
pub fn acme_payload_with(field: &str, value: Value) -> Value {
    let mut payload = acme_payload();
    if let Some(map) = payload.as_object_mut() {
        map.insert(field.to_string(), value);
    }
    payload
}
