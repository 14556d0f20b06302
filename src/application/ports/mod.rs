//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod preference_storage;

pub use preference_storage::{PreferenceStoragePort, StorageError, PREFERENCES_SLOT_KEY};
