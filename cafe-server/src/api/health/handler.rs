use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::cafe;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Stored cafes; doubles as a database round trip
    cafes: i64,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let cafes = cafe::count(&state.pool).await?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cafes,
    }))
}
