//! Invoice service: create, list and look up invoices
//!
//! The service owns no state of its own. Storage and time are injected so
//! the logic runs the same against any [`InvoiceStore`] and any [`Clock`].

use crate::core::{Clock, Invoice, InvoiceError, InvoiceResult, InvoiceStore, NewInvoice};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Clone)]
pub struct InvoiceService {
    store: Arc<dyn InvoiceStore>,
    clock: Arc<dyn Clock>,
}

impl InvoiceService {
    pub fn new(store: Arc<dyn InvoiceStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate a create request, price it and append it to the store
    ///
    /// Nothing is stored when validation fails.
    pub async fn create(&self, payload: &Map<String, Value>) -> InvoiceResult<Invoice> {
        let input = NewInvoice::from_payload(payload)?;
        let invoice = Invoice::issue(input, self.clock.now());
        let stored = self.store.append(invoice).await?;

        tracing::info!(
            id = %stored.id,
            spool_type = %stored.spool_type,
            quantity = stored.quantity,
            total_price = stored.total_price,
            "invoice created"
        );

        Ok(stored)
    }

    /// All invoices, oldest first
    pub async fn list(&self) -> InvoiceResult<Vec<Invoice>> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: &str) -> InvoiceResult<Invoice> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| InvoiceError::NotFound { id: id.to_string() })
    }
}
