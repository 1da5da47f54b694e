//! REST exposure
//!
//! Combines the invoice routes, the health routes, the JSON 404 fallback and
//! the HTTP layers into
//! the final `Router`.

use crate::core::InvoiceError;
use crate::invoices::handlers::AppState;
use crate::server::router::build_invoice_routes;
use axum::{Json, Router, http::Uri, routing::get};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Name reported by the health endpoints
pub const SERVICE_NAME: &str = "spool-invoice";

pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Arguments
    ///
    /// * `state` - Handler state holding the invoice service
    /// * `cors` - Whether to answer cross-origin requests permissively
    pub fn build_router(state: AppState, cors: bool) -> Router {
        let app = Self::health_routes()
            .merge(build_invoice_routes(state))
            .fallback(Self::route_not_found);

        let app = if cors {
            app.layer(CorsLayer::permissive())
        } else {
            app
        };

        app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": SERVICE_NAME
        }))
    }

    async fn route_not_found(uri: Uri) -> InvoiceError {
        InvoiceError::RouteNotFound {
            path: uri.path().to_string(),
        }
    }
}
