//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Voice Context: 音色目录
//! - Preferences Context: 音色偏好

pub mod preferences;
pub mod voice;
