//! HTTP handlers for invoice operations

use axum::{
    Json,
    extract::{Path, State},
    http::{Method, StatusCode},
};
use serde::Serialize;

use crate::core::validation::JsonObject;
use crate::core::{Invoice, InvoiceError};
use crate::invoices::service::InvoiceService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub invoices: InvoiceService,
}

/// Response body for a successful create
#[derive(Debug, Serialize)]
pub struct CreatedInvoice {
    pub message: String,
    pub invoice: Invoice,
}

/// Create an invoice
///
/// POST /api/invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    JsonObject(payload): JsonObject,
) -> Result<(StatusCode, Json<CreatedInvoice>), InvoiceError> {
    let invoice = state.invoices.create(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedInvoice {
            message: "Invoice created successfully".to_string(),
            invoice,
        }),
    ))
}

/// List all invoices in creation order
///
/// GET /api/invoices
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<Invoice>>, InvoiceError> {
    Ok(Json(state.invoices.list().await?))
}

/// Get one invoice by id
///
/// GET /api/invoices/{id}
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, InvoiceError> {
    Ok(Json(state.invoices.get(&id).await?))
}

/// Fallback for methods the invoice routes do not serve
pub async fn method_not_allowed(method: Method) -> InvoiceError {
    InvoiceError::MethodNotAllowed {
        method: method.to_string(),
    }
}
