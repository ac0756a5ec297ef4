//! 配置模块
//!
//! 配置在进程启动时构造一次，然后显式传给服务端和客户端。
//! 加载顺序：默认值 -> 配置文件 (config.toml) -> `.env` / 环境变量覆盖。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tracing::{debug, info};

/// 服务端默认端口
pub const DEFAULT_PORT: u16 = 5000;

/// 按顺序查找的配置文件路径
const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 系统配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 服务端配置
    pub provider: ProviderConfig,
    /// 客户端配置
    pub client: ClientConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// 服务端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// 绑定地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
    /// `/info` 返回的应用名
    pub app_name: String,
    /// `/info` 返回的版本号
    pub version: String,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 客户端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 后端根地址，端点路径拼接在其后
    pub base_url: String,
    /// 单次请求超时（秒），默认不设超时
    pub request_timeout_secs: Option<u64>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            app_name: "my-backend".to_string(),
            version: "1.0.0".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: format!("http://localhost:{}", DEFAULT_PORT),
            request_timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// 环境变量覆盖项，字段名对应大写的环境变量名
#[derive(Debug, Default, Deserialize)]
pub struct EnvOverrides {
    /// `PORT`
    pub port: Option<u16>,
    /// `API_URL`
    pub api_url: Option<String>,
    /// `LOG_LEVEL`
    pub log_level: Option<String>,
}

impl EnvOverrides {
    /// 从进程环境读取
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<EnvOverrides>()?)
    }

    /// 从键值对读取，测试时不必修改进程环境
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, EnvOverrides>(pairs)?)
    }
}

impl ProviderConfig {
    /// 监听的 socket 地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_address, self.port)
            .parse()
            .map_err(|e| ConfigError::Validation(format!("无效的监听地址: {}", e)))
    }
}

impl Config {
    /// 完整加载流程：配置文件、`.env`、环境变量，最后校验
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("已加载 .env: {}", path.display());
        }

        let mut config = Self::load_from_default_paths()?;
        config.apply_overrides(EnvOverrides::from_env()?);
        config.validate()?;
        Ok(config)
    }

    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn load_from_default_paths() -> Result<Self, ConfigError> {
        for path in &CONFIG_PATHS {
            if Path::new(path).exists() {
                info!("从配置文件加载: {}", path);
                return Self::load_from_file(path);
            }
        }

        debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 应用环境变量覆盖
    pub fn apply_overrides(&mut self, overrides: EnvOverrides) {
        if let Some(port) = overrides.port {
            self.provider.port = port;
        }
        if let Some(api_url) = overrides.api_url {
            self.client.base_url = api_url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level.to_lowercase();
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.provider.port == 0 {
            return Err(ConfigError::Validation("端口必须大于0".to_string()));
        }
        if self.provider.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        self.provider.socket_addr()?;
        if self.provider.app_name.is_empty() || self.provider.version.is_empty() {
            return Err(ConfigError::Validation("应用名和版本号不能为空".to_string()));
        }

        let url = reqwest::Url::parse(&self.client.base_url).map_err(|e| {
            ConfigError::Validation(format!("无效的后端地址 {}: {}", self.client.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "后端地址必须是 http 或 https: {}",
                self.client.base_url
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("环境变量错误: {0}")]
    Env(#[from] envy::Error),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.provider.port, 5000);
        assert_eq!(config.provider.app_name, "my-backend");
        assert_eq!(config.provider.version, "1.0.0");
        assert_eq!(config.client.base_url, "http://localhost:5000");
        assert_eq!(config.client.request_timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.provider.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.client.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.client.base_url = "ftp://localhost:5000".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.provider.app_name.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let overrides = EnvOverrides::from_pairs(pairs(&[
            ("PORT", "8081"),
            ("API_URL", "http://192.168.1.20:8081"),
            ("LOG_LEVEL", "DEBUG"),
            ("UNRELATED", "x"),
        ]))
        .unwrap();

        let mut config = Config::default();
        config.apply_overrides(overrides);
        assert_eq!(config.provider.port, 8081);
        assert_eq!(config.client.base_url, "http://192.168.1.20:8081");
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_env_keeps_defaults() {
        let overrides = EnvOverrides::from_pairs(Vec::new()).unwrap();
        let mut config = Config::default();
        config.apply_overrides(overrides);
        assert_eq!(config.provider.port, DEFAULT_PORT);
        assert_eq!(config.client.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_invalid_port_env() {
        assert!(EnvOverrides::from_pairs(pairs(&[("PORT", "abc")])).is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[provider]\nport = 7000\napp_name = \"demo\"\n\n[client]\nrequest_timeout_secs = 3\n"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.provider.port, 7000);
        assert_eq!(config.provider.app_name, "demo");
        assert_eq!(config.provider.version, "1.0.0");
        assert_eq!(config.client.request_timeout_secs, Some(3));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[provider\nport = ").unwrap();
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_socket_addr() {
        let config = ProviderConfig::default();
        assert_eq!(config.socket_addr().unwrap().port(), 5000);
    }
}
