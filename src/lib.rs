//! # spool-invoice
//!
//! Invoice generation service for filament spool orders.
//!
//! A client posts a client name, email, spool type, price per pound and
//! quantity. The service validates the request, derives the spool weight and
//! the total price, stamps the invoice and keeps it in an in-process store.
//!
//! ## Routes
//!
//! - `POST /api/invoices` - create an invoice
//! - `GET /api/invoices` - list invoices in creation order
//! - `GET /api/invoices/{id}` - get one invoice
//! - `GET /health`, `GET /healthz` - health check
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use spool_invoice::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryInvoiceStore::new())
//!     .build();
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod invoices;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Clock, ErrorResponse, FixedClock, Invoice, InvoiceError, InvoiceResult, InvoiceStore,
        NewInvoice, SpoolType, SystemClock, ValidationError,
    };

    // === Invoices ===
    pub use crate::invoices::{AppState, CreatedInvoice, InvoiceService};

    // === Storage ===
    pub use crate::storage::InMemoryInvoiceStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
}
