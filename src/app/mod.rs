//! 应用层：各功能的处理器、数据模型和服务

pub mod routes;
pub mod system;
pub mod users;

use crate::core::config::ProviderConfig;
use system::service::SystemService;
use users::service::UserService;

/// 处理器共享的应用状态
#[derive(Debug, Clone)]
pub struct AppState {
    pub system_service: SystemService,
    pub user_service: UserService,
    pub timeout_seconds: u64,
}

impl AppState {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            system_service: SystemService::new(config),
            user_service: UserService::new(),
            timeout_seconds: config.timeout_seconds,
        }
    }
}
