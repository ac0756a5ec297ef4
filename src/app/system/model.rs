//! 系统状态数据模型

use serde::{Deserialize, Serialize};

/// 健康检查结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

/// 应用信息，`timestamp` 为请求时刻的 ISO-8601 时间
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub app: String,
    pub version: String,
    pub timestamp: String,
}
