//! Storage trait for invoices

use crate::core::invoice::Invoice;
use anyhow::Result;
use async_trait::async_trait;

/// Append-only invoice storage
///
/// Implementations keep invoices in insertion order. There is no update or
/// delete: an invoice is immutable once appended.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Append an invoice and return it as stored
    async fn append(&self, invoice: Invoice) -> Result<Invoice>;

    /// List all invoices in insertion order
    async fn list(&self) -> Result<Vec<Invoice>>;

    /// Get the first invoice whose id matches exactly
    async fn get(&self, id: &str) -> Result<Option<Invoice>>;
}
