//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::io;
use uuid::Uuid;

use super::config::ConfigError;

/// HTTP 层错误类型
///
/// 三个端点本身不会失败，这里只覆盖路由之外的请求。
#[derive(Debug)]
pub enum CoreError {
    NotFound(String),
}

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
    pub request_id: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, error_message, user_message) = match self {
            CoreError::NotFound(path) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("路径 {} 不存在", path),
            ),
        };

        let error_response = ErrorResponse {
            error: error_message.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            request_id: Uuid::new_v4().to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// 服务端启动和运行期间的错误
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    #[error("无法绑定到 {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("服务器运行失败: {0}")]
    Serve(#[source] io::Error),
}
