//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PreferenceStorage）
//! - store: 音色偏好存储（load-modify-save 与解析）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod store;

// Re-exports
pub use commands::{
    handlers::{
        RemoveBookVoiceHandler, ResetPreferencesHandler, SetBookVoiceHandler,
        SetDefaultVoiceHandler,
    },
    RemoveBookVoice, ResetPreferences, SetBookVoice, SetDefaultVoice,
};

pub use error::ApplicationError;

pub use ports::{PreferenceStoragePort, StorageError, PREFERENCES_SLOT_KEY};

pub use queries::{
    handlers::{
        BookVoiceEntry, GetPreferencesHandler, GetVoiceHandler, ListVoicesHandler,
        PreferencesResponse, ResolveVoiceHandler, ResolvedVoiceResponse, VoiceResponse,
    },
    GetPreferences, GetVoice, ListVoices, ResolveVoice,
};

pub use store::VoicePreferenceStore;
