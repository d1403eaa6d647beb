//! 服务配置

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 依次查找的配置文件路径
pub const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 服务配置结构
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// HTTP 服务配置
    #[serde(default)]
    pub http: HttpConfig,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志文件路径
    pub log_path: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 是否启用控制台输出
    pub console_output: bool,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            timeout_seconds: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./logs"),
            file_prefix: "food-order".to_string(),
            console_output: true,
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// 从配置文件加载配置，缺省的字段取默认值
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("请求超时时间必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
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
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，并完成校验
///
/// 日志系统此时还未初始化，返回值里带上配置来源供调用方记录。
pub fn load_config() -> Result<(Config, Option<&'static str>), ConfigError> {
    let found = CONFIG_PATHS.iter().copied().find(|p| Path::new(p).exists());
    let config = match found {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    config.validate()?;
    Ok((config, found))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.port, 3000);
        assert_eq!(config.http.bind_address, "0.0.0.0");
        assert_eq!(config.http.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.http.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.http.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = Config::default();
        config.http.bind_address = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_load_full_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[http]
bind_address = "127.0.0.1"
port = 8088
timeout_seconds = 10

[logging]
log_path = "/tmp/food-order-logs"
file_prefix = "orders"
console_output = false
level = "debug"
"#,
        )
        .unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.socket_addr(), "127.0.0.1:8088");
        assert_eq!(loaded.http.request_timeout(), Duration::from_secs(10));
        assert_eq!(loaded.logging.log_path, PathBuf::from("/tmp/food-order-logs"));
        assert_eq!(loaded.logging.file_prefix, "orders");
        assert!(!loaded.logging.console_output);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[http]\nport = 4000\n").unwrap();

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded.http.port, 4000);
        assert_eq!(loaded.http.bind_address, "0.0.0.0");
        assert_eq!(loaded.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_from_file(&missing),
            Err(ConfigError::FileRead(_))
        ));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[http\nport = ").unwrap();
        assert!(matches!(
            Config::load_from_file(&broken),
            Err(ConfigError::Parse(_))
        ));
    }
}
