//! Preferences Context - 音色偏好限界上下文
//!
//! 职责:
//! - 用户默认音色
//! - 按书籍的音色覆盖
//! - 实际朗读音色解析

mod aggregate;
mod errors;

pub use aggregate::VoicePreferences;
pub use errors::PreferenceError;
