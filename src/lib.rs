//! # 前后端联调演示
//!
//! - `app`: 三个只读 JSON 端点 (`/health`, `/users`, `/info`) 的处理器、模型和服务
//! - `core`: 配置、错误处理、中间件
//! - `infrastructure`: 日志
//! - `server`: 端口绑定和服务生命周期
//! - `client`: 调用端点并渲染结果的终端客户端

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;
pub mod server;

pub use crate::core::config::Config;
pub use crate::core::error::ServerError;
