//! 交互会话：逐行读取命令，状态变化时重新渲染
//!
//! 输入结束或 `quit` 时会等最后一个请求完成并渲染结果后再退出；
//! `shutdown` 完成时立即退出，不等待未完成的请求。

use std::future::Future;
use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use tracing::debug;

use super::dashboard::Dashboard;
use super::render::{render, render_header};
use super::view::Action;

const QUIT_COMMANDS: [&str; 3] = ["quit", "exit", "q"];

pub async fn run_session<R, W, F>(
    dashboard: &Arc<Dashboard>,
    input: R,
    out: &mut W,
    shutdown: F,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    F: Future<Output = ()>,
{
    write_screen(out, &render_header(dashboard.client().base_url()))?;

    let mut updates = dashboard.subscribe();
    let mut lines = input.lines();
    let mut pending: Option<JoinHandle<()>> = None;
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let command = line.trim();
                if QUIT_COMMANDS.contains(&command) {
                    break;
                }
                if command.is_empty() {
                    continue;
                }
                match Action::from_command(command) {
                    Some(action) => pending = Some(dashboard.trigger(action)),
                    None => write_screen(out, &format!("未知命令: {}\n", command))?,
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let screen = render(&updates.borrow_and_update());
                write_screen(out, &screen)?;
            }
            _ = &mut shutdown => {
                debug!("收到停止信号，退出会话");
                return Ok(());
            }
        }
    }

    if let Some(handle) = pending {
        if let Err(e) = handle.await {
            debug!("最后一个请求未完成: {}", e);
        }
    }
    if updates.has_changed().unwrap_or(false) {
        let screen = render(&updates.borrow_and_update());
        write_screen(out, &screen)?;
    }

    Ok(())
}

fn write_screen<W: Write>(out: &mut W, screen: &str) -> io::Result<()> {
    out.write_all(screen.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::ApiClient;
    use crate::core::config::ClientConfig;

    fn offline_dashboard() -> Arc<Dashboard> {
        let client = ApiClient::new(&ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: Some(5),
        })
        .unwrap();
        Arc::new(Dashboard::new(client))
    }

    #[tokio::test]
    async fn test_unknown_command_and_quit() {
        let dashboard = offline_dashboard();
        let mut out = Vec::new();

        run_session(&dashboard, &b"info\n\nquit\nusers\n"[..], &mut out, std::future::pending())
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Frontend Connected!\n"));
        assert!(out.contains("未知命令: info\n"));
        assert!(!out.contains("Loading..."));
    }

    #[tokio::test]
    async fn test_eof_waits_for_last_request() {
        let dashboard = offline_dashboard();
        let mut out = Vec::new();

        run_session(&dashboard, &b"health"[..], &mut out, std::future::pending())
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("Failed to connect to backend\n"));
        assert!(!dashboard.state().is_loading());
    }

    #[tokio::test]
    async fn test_shutdown_exits_immediately() {
        let dashboard = offline_dashboard();
        let mut out = Vec::new();

        run_session(&dashboard, tokio::io::empty(), &mut out, async {})
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Frontend Connected!\n"));
    }
}
