//! 路由定义

use axum::{extract::OriginalUri, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{
    system::handler::{app_info, health_check},
    users::handler::list_users,
    AppState,
};
use crate::core::{
    error::CoreError,
    middleware::{cors_layer, request_logging_middleware, timeout_layer},
};

/// `/api` 前缀下同样挂载一份端点
pub const API_PREFIX: &str = "/api";

/// 路由表：(方法, 路径, 说明)
pub const ROUTES: [(&str, &str, &str); 3] = [
    ("GET", "/health", "健康检查"),
    ("GET", "/users", "用户列表"),
    ("GET", "/info", "应用信息"),
];

/// 创建完整的路由，包含中间件和 404 兜底
pub fn create_router(state: AppState) -> Router {
    let endpoints = Router::new()
        .route("/health", get(health_check))
        .route("/users", get(list_users))
        .route("/info", get(app_info));

    Router::new()
        .merge(endpoints.clone())
        .nest(API_PREFIX, endpoints)
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(timeout_layer(state.timeout_seconds))
        .with_state(state)
}

async fn not_found(OriginalUri(uri): OriginalUri) -> CoreError {
    CoreError::NotFound(uri.path().to_string())
}
