//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 偏好存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Sled 嵌入式数据库
    Sled,
    /// 目录下的 JSON 文件
    File,
    /// 进程内存（不持久化）
    Memory,
    /// 无持久化存储
    None,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Sled => "sled",
            StorageBackend::File => "file",
            StorageBackend::Memory => "memory",
            StorageBackend::None => "none",
        }
    }

    /// 是否需要磁盘路径
    pub fn is_durable(&self) -> bool {
        matches!(self, StorageBackend::Sled | StorageBackend::File)
    }
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Sled
    }
}

/// 偏好存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 存储后端
    #[serde(default)]
    pub backend: StorageBackend,

    /// 数据路径（sled 数据库目录或 JSON 文件目录）
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("data/preferences.sled")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.backend, StorageBackend::Sled);
        assert_eq!(config.storage.path, PathBuf::from("data/preferences.sled"));
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_parse_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            backend = "file"
            path = "/var/lib/bibo"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.path, PathBuf::from("/var/lib/bibo"));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_backend_durability() {
        assert!(StorageBackend::Sled.is_durable());
        assert!(StorageBackend::File.is_durable());
        assert!(!StorageBackend::Memory.is_durable());
        assert!(!StorageBackend::None.is_durable());
    }
}
