//! Invoice operations and their HTTP handlers

pub mod handlers;
pub mod service;

pub use handlers::{AppState, CreatedInvoice, create_invoice, get_invoice, list_invoices};
pub use service::InvoiceService;
