//! Persistence Layer - 数据持久化
//!
//! Sled 和文件系统两种持久化槽位实现

pub mod file;
pub mod sled;

pub use self::file::FilePreferenceStorage;
pub use self::sled::{SledPreferenceStorage, SledStorageConfig};
