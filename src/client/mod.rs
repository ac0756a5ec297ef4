//! 终端客户端：请求后端、维护视图状态、渲染结果

pub mod api;
pub mod dashboard;
pub mod render;
pub mod session;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use dashboard::Dashboard;
pub use render::{render, render_header};
pub use session::run_session;
pub use view::{Action, Payload, ViewState};
