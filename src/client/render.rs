//! 终端渲染，输出只取决于视图状态

use super::view::{Action, ViewState};

pub const TITLE: &str = "Frontend Connected!";
pub const SUBTITLE: &str = "Testing the pipeline !!!";

/// 标题和可用命令
pub fn render_header(base_url: &str) -> String {
    let mut out = format!("{}\n{}\nBackend: {}\n", TITLE, SUBTITLE, base_url);
    for action in Action::ALL {
        out.push_str(&format!("  [{}] {}\n", action.command(), action.label()));
    }
    out.push_str("  [quit] Exit\n");
    out
}

pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading(_) => "Loading...\n".to_string(),
        ViewState::Failed(message) => format!("{}\n", message),
        ViewState::Health(health) => {
            let body = serde_json::to_string_pretty(health)
                .unwrap_or_else(|_| format!("{:?}", health));
            format!("Backend Health:\n{}\n", body)
        }
        ViewState::Users(users) => {
            let mut out = String::from("Users:\n");
            for user in users {
                out.push_str(&format!("  - {} (ID: {})\n", user.name, user.id));
            }
            out
        }
    }
}
