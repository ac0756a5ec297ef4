//! 服务端入口

use pipeline_demo::{infrastructure::logger::Logger, server, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    Logger::init(&config.logging.level);

    info!(
        "启动 {} v{} ...",
        config.provider.app_name, config.provider.version
    );

    server::run(&config.provider).await?;
    Ok(())
}
