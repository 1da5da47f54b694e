//! Core module containing the invoice domain types and traits

pub mod clock;
pub mod error;
pub mod invoice;
pub mod service;
pub mod spool;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ErrorResponse, InvoiceError, InvoiceResult, ValidationError};
pub use invoice::{Invoice, NewInvoice};
pub use service::InvoiceStore;
pub use spool::SpoolType;
