//! Ping Handler
//!
//! 健康检查：同时确认仓储可用

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub characters: usize,
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    let characters = state.character_repo.count().await?;

    Ok(Json(PingResponse {
        characters,
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
