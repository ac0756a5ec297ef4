//! 日志基础设施

use std::io;

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// 初始化全局日志，`RUST_LOG` 优先于配置中的级别
    pub fn init(level: &str) {
        let result = fmt()
            .with_env_filter(Self::filter(level))
            .with_target(false)
            .try_init();
        if let Err(e) = result {
            debug!("日志已初始化，沿用现有配置: {}", e);
        }
    }

    /// 日志写到 stderr，stdout 留给终端界面
    pub fn init_stderr(level: &str) {
        let result = fmt()
            .with_env_filter(Self::filter(level))
            .with_target(false)
            .with_writer(io::stderr)
            .try_init();
        if let Err(e) = result {
            debug!("日志已初始化，沿用现有配置: {}", e);
        }
    }

    fn filter(level: &str) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        Logger::init("info");
        Logger::init_stderr("debug");
        Logger::init("warn");
        assert!(tracing::dispatcher::has_been_set());
    }
}
