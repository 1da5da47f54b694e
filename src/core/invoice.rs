//! Invoice model and the create-request parsing that feeds it

use super::error::ValidationError;
use super::spool::SpoolType;
use super::validation::validators::{
    at_most, number_field, positive, require_truthy, string_field, whole_at_least,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields a create request must carry
pub const REQUIRED_FIELDS: [&str; 5] = [
    "clientName",
    "clientEmail",
    "spoolType",
    "pricePerPound",
    "quantity",
];

/// Largest quantity that survives a round trip through a JSON number
pub const MAX_QUANTITY: u64 = 9_007_199_254_740_991;

/// A stored invoice
///
/// Invoices are never modified after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Millisecond Unix timestamp of creation, as a decimal string
    ///
    /// Two invoices created in the same millisecond share an id.
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub client_name: String,
    pub client_email: String,
    pub spool_type: SpoolType,
    pub price_per_pound: f64,
    pub spool_weight: f64,
    pub quantity: u64,
    pub total_price: f64,
}

impl Invoice {
    /// Build an invoice from validated input, stamped at `created_at`
    pub fn issue(input: NewInvoice, created_at: DateTime<Utc>) -> Self {
        let spool_weight = input.spool_type.weight();
        Self {
            id: created_at.timestamp_millis().to_string(),
            created_at,
            total_price: total_price(input.price_per_pound, spool_weight, input.quantity),
            client_name: input.client_name,
            client_email: input.client_email,
            spool_type: input.spool_type,
            price_per_pound: input.price_per_pound,
            spool_weight,
            quantity: input.quantity,
        }
    }
}

/// Validated input for a new invoice
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub client_name: String,
    pub client_email: String,
    pub spool_type: SpoolType,
    pub price_per_pound: f64,
    pub quantity: u64,
}

impl NewInvoice {
    /// Validate a raw create request
    ///
    /// Checks run in a fixed order: required fields first, then the spool
    /// type, then per-field types and ranges.
    pub fn from_payload(payload: &Map<String, Value>) -> Result<Self, ValidationError> {
        require_truthy(payload, &REQUIRED_FIELDS)?;

        let spool_type = match field(payload, "spoolType") {
            Value::String(s) => s.parse::<SpoolType>()?,
            other => {
                return Err(ValidationError::InvalidSpoolType {
                    value: other.to_string(),
                });
            }
        };

        let client_name = string_field("clientName", field(payload, "clientName"))?;
        let client_email = string_field("clientEmail", field(payload, "clientEmail"))?;

        let price_per_pound = number_field("pricePerPound", field(payload, "pricePerPound"))?;
        positive()("pricePerPound", price_per_pound)?;

        let quantity = number_field("quantity", field(payload, "quantity"))?;
        whole_at_least(1)("quantity", quantity)?;
        at_most(MAX_QUANTITY as f64)("quantity", quantity)?;

        let cents = price_per_pound * spool_type.weight() * quantity * 100.0;
        if !cents.is_finite() {
            return Err(ValidationError::InvalidField {
                field: "totalPrice".to_string(),
                message: "is too large to invoice".to_string(),
            });
        }

        Ok(Self {
            client_name,
            client_email,
            spool_type,
            price_per_pound,
            quantity: quantity as u64,
        })
    }
}

fn field<'a>(payload: &'a Map<String, Value>, name: &str) -> &'a Value {
    payload.get(name).unwrap_or(&Value::Null)
}

/// `price × weight × quantity`, rounded to cents
pub fn total_price(price_per_pound: f64, spool_weight: f64, quantity: u64) -> f64 {
    round_cents(price_per_pound * spool_weight * quantity as f64)
}

/// Round to two decimal places, halves away from zero
///
/// Values too large to scale to cents carry no fraction and are returned as is.
pub fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    if cents.is_finite() {
        cents.round() / 100.0
    } else {
        value
    }
}
