//! Request validation
//!
//! [`validators`] holds the field checks applied to a create request and
//! [`extractor`] turns a raw request body into a JSON object, rejecting
//! anything else with an `{error}` body.

pub mod extractor;
pub mod validators;

pub use extractor::JsonObject;
pub use validators::{is_truthy, require_truthy};
