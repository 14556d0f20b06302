//! Preferences Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("偏好记录格式错误: {0}")]
    MalformedRecord(String),

    #[error("偏好记录序列化失败: {0}")]
    SerializationError(String),
}
