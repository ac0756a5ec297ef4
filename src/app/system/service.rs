//! 系统状态服务

use chrono::{DateTime, SecondsFormat, Utc};

use super::model::{AppInfo, HealthStatus};
use crate::core::config::ProviderConfig;

pub const HEALTH_STATUS: &str = "OK";
pub const HEALTH_MESSAGE: &str = "Backend is running";

#[derive(Debug, Clone)]
pub struct SystemService {
    app_name: String,
    version: String,
}

impl SystemService {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            app_name: config.app_name.clone(),
            version: config.version.clone(),
        }
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: HEALTH_STATUS.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }

    /// 以当前时刻生成应用信息
    pub fn info(&self) -> AppInfo {
        self.info_at(Utc::now())
    }

    pub fn info_at(&self, now: DateTime<Utc>) -> AppInfo {
        AppInfo {
            app: self.app_name.clone(),
            version: self.version.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_health_is_constant() {
        let service = SystemService::new(&ProviderConfig::default());
        let health = service.health();
        assert_eq!(health.status, "OK");
        assert_eq!(health.message, "Backend is running");
        assert_eq!(service.health(), health);
    }

    #[test]
    fn test_info_timestamp_format() {
        let service = SystemService::new(&ProviderConfig::default());
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 5).unwrap();
        let info = service.info_at(now);
        assert_eq!(info.app, "my-backend");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.timestamp, "2025-03-01T08:30:05.000Z");
    }

    #[test]
    fn test_info_uses_config() {
        let config = ProviderConfig {
            app_name: "staging-backend".to_string(),
            version: "2.1.0".to_string(),
            ..ProviderConfig::default()
        };
        let info = SystemService::new(&config).info();
        assert_eq!(info.app, "staging-backend");
        assert_eq!(info.version, "2.1.0");
        assert!(DateTime::parse_from_rfc3339(&info.timestamp).is_ok());
    }
}
