//! Axum extractor for JSON object bodies
//!
//! Axum's own `Json` rejection answers with a plain-text body. Handlers in
//! this crate always answer with `{"error": ...}`, so the body is extracted
//! here and any rejection is converted into a [`ValidationError`].

use crate::core::error::{InvoiceError, ValidationError};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};

/// A request body that parsed as a JSON object
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_invoice(
///     JsonObject(payload): JsonObject,
/// ) -> Result<impl IntoResponse, InvoiceError> {
///     // payload is a serde_json::Map
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonObject(pub Map<String, Value>);

impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = InvoiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload): Json<Value> = Json::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::InvalidJson {
                message: rejection.body_text(),
            })?;

        match payload {
            Value::Object(map) => Ok(JsonObject(map)),
            other => Err(ValidationError::InvalidJson {
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            }
            .into()),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
