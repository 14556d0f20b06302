//! Preference Storage Port - 偏好持久化槽位
//!
//! 定义单个键值槽位的抽象接口，具体实现在 infrastructure/persistence 与
//! infrastructure/memory 层

use thiserror::Error;

/// 偏好记录所在槽位的固定 key
pub const PREFERENCES_SLOT_KEY: &str = "bibo-voice-preferences";

/// Preference Storage 错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: {size} bytes > {limit} bytes")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid encoding: {0}")]
    EncodingError(String),
}

/// Preference Storage Port
///
/// 字符串键值槽位，读写均为整值覆盖
pub trait PreferenceStoragePort: Send + Sync {
    /// 后端名称（用于日志）
    fn backend_name(&self) -> &'static str;

    /// 槽位是否可用
    ///
    /// 返回 false 时调用方不应做任何读写
    fn is_available(&self) -> bool {
        true
    }

    /// 写入的值是否在进程退出后仍然保留
    fn is_durable(&self) -> bool {
        true
    }

    /// 读取槽位，不存在时返回 None
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 覆盖写入槽位
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// 删除槽位，不存在时不报错
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
