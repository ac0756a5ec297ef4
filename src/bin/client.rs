//! 终端客户端入口
//!
//! 用法:
//!   client           交互模式，输入 health / users / quit
//!   client health    执行一次健康检查后退出
//!   client users     获取一次用户列表后退出

use std::env;
use std::io;
use std::sync::Arc;

use pipeline_demo::client::{render, run_session, Action, ApiClient, Dashboard, ViewState};
use pipeline_demo::infrastructure::logger::Logger;
use pipeline_demo::Config;
use tokio::io::BufReader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    Logger::init_stderr(&config.logging.level);

    let client = ApiClient::new(&config.client)?;
    info!("后端地址: {}", client.base_url());
    let dashboard = Arc::new(Dashboard::new(client));

    let args: Vec<String> = env::args().collect();
    if args.len() > 1 {
        match Action::from_command(&args[1]) {
            Some(action) => {
                let state = dashboard.run(action).await;
                print!("{}", render(&state));
                if let ViewState::Failed(_) = state {
                    std::process::exit(1);
                }
            }
            None => print_usage(),
        }
        return Ok(());
    }

    interactive(dashboard).await
}

async fn interactive(dashboard: Arc<Dashboard>) -> anyhow::Result<()> {
    let input = BufReader::new(tokio::io::stdin());
    let mut out = io::stdout();
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    run_session(&dashboard, input, &mut out, shutdown).await?;
    Ok(())
}

fn print_usage() {
    println!("用法: client [命令]");
    println!();
    println!("可用的命令:");
    for action in Action::ALL {
        println!("  {:<8} - {}", action.command(), action.label());
    }
    println!();
    println!("不带参数时进入交互模式。");
}
