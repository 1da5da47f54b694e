//! Macro-generated test suite for the `InvoiceStore` contract.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use spool_invoice::storage::InMemoryInvoiceStore;
//!
//! invoice_store_tests!(InMemoryInvoiceStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_append_returns_stored` — append echoes the invoice
//! - `test_get_by_id` — get finds an appended invoice
//! - `test_get_nonexistent` — unknown id returns None
//! - `test_list_empty` — fresh store lists nothing
//! - `test_list_insertion_order` — list keeps append order, not id order
//! - `test_duplicate_ids_first_wins` — same id twice, get returns the first
//! - `test_concurrent_appends` — parallel appends from spawned tasks

/// Generate an `InvoiceStore` conformance test suite.
///
/// `$factory` is re-evaluated for each test. For the concurrent test the
/// store must also be `Clone + 'static` with shared state.
#[macro_export]
macro_rules! invoice_store_tests {
    ($factory:expr) => {
        mod invoice_store_contract_tests {
            use super::*;
            use spool_invoice::core::{InvoiceStore, SpoolType};

            #[tokio::test]
            async fn test_append_returns_stored() {
                let store = $factory;
                let invoice = sample_invoice(0, "Acme", SpoolType::Lb44);

                let stored = store.append(invoice.clone()).await.unwrap();
                assert_eq!(stored, invoice);
            }

            #[tokio::test]
            async fn test_get_by_id() {
                let store = $factory;
                let invoice = sample_invoice(7, "Acme", SpoolType::Lb550);
                store.append(invoice.clone()).await.unwrap();

                let fetched = store.get(&invoice.id).await.unwrap();
                assert_eq!(fetched, Some(invoice));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                store
                    .append(sample_invoice(0, "Acme", SpoolType::Lb33))
                    .await
                    .unwrap();

                assert!(store.get("0").await.unwrap().is_none());
                assert!(store.get("not-a-timestamp").await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_insertion_order() {
                let store = $factory;
                let later = sample_invoice(100, "Later", SpoolType::Lb33);
                let earlier = sample_invoice(1, "Earlier", SpoolType::Lb44);
                store.append(later.clone()).await.unwrap();
                store.append(earlier.clone()).await.unwrap();

                assert_eq!(store.list().await.unwrap(), vec![later, earlier]);
            }

            #[tokio::test]
            async fn test_duplicate_ids_first_wins() {
                let store = $factory;
                let first = sample_invoice(5, "First", SpoolType::Lb33);
                let second = sample_invoice(5, "Second", SpoolType::Lb44);
                assert_eq!(first.id, second.id);

                store.append(first.clone()).await.unwrap();
                store.append(second).await.unwrap();

                assert_eq!(store.list().await.unwrap().len(), 2);
                assert_eq!(store.get(&first.id).await.unwrap(), Some(first));
            }

            #[tokio::test]
            async fn test_concurrent_appends() {
                let store = $factory;
                let mut handles = Vec::new();

                for i in 0..20 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store
                            .append(sample_invoice(i, "Client", SpoolType::Lb44))
                            .await
                            .unwrap();
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                assert_eq!(store.list().await.unwrap().len(), 20);
            }
        }
    };
}
