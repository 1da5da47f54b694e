//! Router builder for invoice routes

use crate::invoices::handlers::{
    AppState, create_invoice, get_invoice, list_invoices, method_not_allowed,
};
use axum::{Router, routing::get};

/// Build the invoice routes
///
/// - GET  /api/invoices      - List invoices
/// - POST /api/invoices      - Create an invoice
/// - GET  /api/invoices/{id} - Get one invoice
///
/// Any other method on these paths answers 405 with an `{error}` body.
pub fn build_invoice_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/invoices",
            get(list_invoices)
                .post(create_invoice)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/invoices/{id}",
            get(get_invoice).fallback(method_not_allowed),
        )
        .with_state(state)
}
