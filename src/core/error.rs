//! Typed error handling for the invoice service
//!
//! Errors fall into two groups:
//!
//! - [`ValidationError`], [`InvoiceError::NotFound`],
//!   [`InvoiceError::RouteNotFound`] and [`InvoiceError::MethodNotAllowed`]:
//!   caller mistakes, reported with a 4xx status and a plain message.
//! - [`InvoiceError::Internal`]: anything unexpected. The detail is logged and
//!   the caller only ever sees a generic 500.
//!
//! Every error renders as `{"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The main error type for invoice operations
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No invoice carries the requested identifier
    #[error("Invoice not found")]
    NotFound { id: String },

    /// No route matches the request path
    #[error("Route {path} not found")]
    RouteNotFound { path: String },

    /// The route exists but not for this HTTP method
    #[error("Method {method} not allowed")]
    MethodNotAllowed { method: String },

    /// Unexpected failure; never shown to the caller verbatim
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors produced while validating a create request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or more required fields are absent or falsy
    #[error("Missing required fields")]
    MissingFields { fields: Vec<String> },

    /// `spoolType` is not one of the known spool types
    #[error("Invalid spool type")]
    InvalidSpoolType { value: String },

    /// A present field has the wrong type or an out-of-range value
    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// The request body could not be read as a JSON object
    #[error("Invalid JSON body: {message}")]
    InvalidJson { message: String },
}

/// Error body returned by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl InvoiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            InvoiceError::Validation(_) => StatusCode::BAD_REQUEST,
            InvoiceError::NotFound { .. } | InvoiceError::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            InvoiceError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            InvoiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response
    ///
    /// Internal errors are replaced by [`INTERNAL_ERROR_MESSAGE`].
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            InvoiceError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        };
        ErrorResponse { error }
    }
}

impl IntoResponse for InvoiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            InvoiceError::Internal(detail) => tracing::error!(%detail, "request failed"),
            InvoiceError::Validation(err) => tracing::warn!(error = %err, "rejected request"),
            _ => tracing::debug!(error = %self, "request error"),
        }
        (status, Json(self.to_response())).into_response()
    }
}

impl From<anyhow::Error> for InvoiceError {
    fn from(err: anyhow::Error) -> Self {
        InvoiceError::Internal(format!("{:#}", err))
    }
}

/// A specialized Result type for invoice operations
pub type InvoiceResult<T> = Result<T, InvoiceError>;
