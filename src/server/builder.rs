//! ServerBuilder for fluent API to build the HTTP server

use super::rest::RestExposure;
use crate::config::ServerConfig;
use crate::core::{Clock, InvoiceStore, SystemClock};
use crate::invoices::{AppState, InvoiceService};
use crate::storage::InMemoryInvoiceStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the invoice HTTP server
///
/// Without explicit calls it uses an [`InMemoryInvoiceStore`] and the
/// [`SystemClock`].
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryInvoiceStore::new())
///     .build();
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn InvoiceStore>>,
    clock: Option<Arc<dyn Clock>>,
    cors: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            store: None,
            clock: None,
            cors: true,
        }
    }

    /// Create a builder with the options from a config
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new().with_cors(config.cors)
    }

    /// Set the invoice store
    pub fn with_store(mut self, store: impl InvoiceStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set the clock used to stamp invoices
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Enable or disable permissive CORS
    pub fn with_cors(mut self, cors: bool) -> Self {
        self.cors = cors;
        self
    }

    fn build_service(
        store: Option<Arc<dyn InvoiceStore>>,
        clock: Option<Arc<dyn Clock>>,
    ) -> InvoiceService {
        let store = store.unwrap_or_else(|| Arc::new(InMemoryInvoiceStore::new()));
        let clock = clock.unwrap_or_else(|| Arc::new(SystemClock));
        InvoiceService::new(store, clock)
    }

    /// Build the final REST router
    pub fn build(self) -> Router {
        let state = AppState {
            invoices: Self::build_service(self.store, self.clock),
        };
        RestExposure::build_router(state, self.cors)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build();
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
