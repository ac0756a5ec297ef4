//! 用户处理器

use axum::{extract::State, response::Json};

use super::model::User;
use crate::app::AppState;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users())
}
