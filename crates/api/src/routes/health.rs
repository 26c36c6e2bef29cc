use axum::extract::State;
use axum::{routing::get, Json, Router};
use portfolio_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Overall service status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
}

/// Reachability of the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub database: DatabaseStatus,
    /// Time the check ran.
    pub timestamp: Timestamp,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service and database health. Never writes.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let (status, database) = match portfolio_db::health_check(&state.pool).await {
        Ok(()) => (ServiceStatus::Healthy, DatabaseStatus::Connected),
        Err(err) => {
            tracing::warn!(error = %err, "Database health check failed");
            (ServiceStatus::Unhealthy, DatabaseStatus::Disconnected)
        }
    };

    Json(HealthResponse {
        status,
        database,
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
