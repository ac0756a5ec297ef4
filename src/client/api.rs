//! 后端 API 客户端

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app::{system::model::HealthStatus, users::model::User};
use crate::core::config::ClientConfig;

pub const HEALTH_PATH: &str = "/api/health";
pub const USERS_PATH: &str = "/api/users";

/// 客户端请求错误
///
/// 界面上不区分这些情况，统一显示为动作对应的固定提示。
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP 客户端构建失败: {0}")]
    Build(#[source] reqwest::Error),
    #[error("请求失败: {0}")]
    Request(#[source] reqwest::Error),
    #[error("HTTP 状态异常: {0}")]
    Status(reqwest::StatusCode),
    #[error("响应解析失败: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json(HEALTH_PATH).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json(USERS_PATH).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        response.json::<T>().await.map_err(ClientError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig {
            base_url: "http://localhost:5000/".to_string(),
            request_timeout_secs: Some(1),
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
