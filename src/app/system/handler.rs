//! 系统状态处理器

use axum::{extract::State, response::Json};

use super::model::{AppInfo, HealthStatus};
use crate::app::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.system_service.health())
}

pub async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(state.system_service.info())
}
