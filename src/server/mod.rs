//! Server module for building the HTTP service
//!
//! [`ServerBuilder`] wires a store and a clock into an [`InvoiceService`],
//! and [`RestExposure`] turns that into an axum `Router` with:
//! - invoice routes under `/api/invoices`
//! - health check routes
//! - request tracing and optional CORS
//!
//! [`InvoiceService`]: crate::invoices::InvoiceService

pub mod builder;
pub mod rest;
pub mod router;

pub use builder::ServerBuilder;
pub use rest::RestExposure;
pub use router::build_invoice_routes;
