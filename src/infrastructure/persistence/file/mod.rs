//! File Persistence - 文件系统偏好存储

mod preference_storage;

pub use preference_storage::FilePreferenceStorage;
