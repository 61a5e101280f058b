use axum::{extract::State, Json};
use std::sync::Arc;

use crate::service::HealthStatus;
use crate::state::AppState;

/// GET /health - 健康检查
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(state.health.status())
}
