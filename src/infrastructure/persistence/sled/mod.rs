//! Sled Persistence - Sled 嵌入式数据库偏好存储

mod preference_storage;

pub use preference_storage::{SledPreferenceStorage, SledStorageConfig};
