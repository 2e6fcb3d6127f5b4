//! REST API for the derived board view.
//!
//! Provides two GET endpoints:
//! - `/view` — derived table (headers, rows) plus the view summary
//! - `/rows` — dataset rows with schedule detail, optional status filtering

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::table::types::Row;
use crate::table::view::{TableView, ViewSummary};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the view derivation completes and wrapped in
/// `Arc` — no locks needed since all data is read-only.
pub struct AppState {
    /// Derived table view.
    pub view: TableView,
    /// Aggregate view summary.
    pub summary: ViewSummary,
    /// Full row dataset with evaluated statuses.
    pub rows: Vec<Row>,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/view", get(handlers::get_view))
        .route("/rows", get(handlers::get_rows))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
