//! 客户端视图状态
//!
//! 每次只显示一种结果：加载中、健康检查、用户列表或错误提示，由枚举保证互斥。

use tracing::warn;

use super::api::ClientError;
use crate::app::{system::model::HealthStatus, users::model::User};

/// 用户可触发的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckHealth,
    GetUsers,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::CheckHealth, Action::GetUsers];

    /// 交互命令名
    pub fn command(self) -> &'static str {
        match self {
            Action::CheckHealth => "health",
            Action::GetUsers => "users",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::CheckHealth => "Check Backend Health",
            Action::GetUsers => "Get Users",
        }
    }

    /// 请求失败时显示的固定提示
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::CheckHealth => "Failed to connect to backend",
            Action::GetUsers => "Failed to fetch users",
        }
    }

    pub fn from_command(command: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.command().eq_ignore_ascii_case(command.trim()))
    }
}

/// 一次成功请求的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Health(HealthStatus),
    Users(Vec<User>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading(Action),
    Health(HealthStatus),
    Users(Vec<User>),
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn health(&self) -> Option<&HealthStatus> {
        match self {
            ViewState::Health(health) => Some(health),
            _ => None,
        }
    }

    pub fn users(&self) -> Option<&[User]> {
        match self {
            ViewState::Users(users) => Some(users.as_slice()),
            _ => None,
        }
    }

    /// 请求结束后的状态，错误统一折叠为动作的固定提示
    pub fn settle(action: Action, result: Result<Payload, ClientError>) -> Self {
        match result {
            Ok(Payload::Health(health)) => ViewState::Health(health),
            Ok(Payload::Users(users)) => ViewState::Users(users),
            Err(e) => {
                warn!("{} 失败: {}", action.label(), e);
                ViewState::Failed(action.failure_message().to_string())
            }
        }
    }
}
