//! In-memory implementation of InvoiceStore
//!
//! Invoices live for the lifetime of the process and are lost on restart.

use crate::core::{Invoice, InvoiceStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// In-memory invoice store
///
/// An ordered list behind an `RwLock`. Clones share the same list.
#[derive(Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<Vec<Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            invoices: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored invoices
    pub fn len(&self) -> Result<usize> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryInvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn append(&self, invoice: Invoice) -> Result<Invoice> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        invoices.push(invoice.clone());

        Ok(invoice)
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Invoice>> {
        let invoices = self
            .invoices
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(invoices.iter().find(|invoice| invoice.id == id).cloned())
    }
}
