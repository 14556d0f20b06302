//! Storage Bootstrap
//!
//! 启动时一次性检测持久化能力，选出偏好槽位实现。
//! 之后所有读写都通过同一个 `PreferenceStoragePort`，不再判断运行环境。

use std::sync::Arc;

use crate::application::ports::PreferenceStoragePort;
use crate::config::{StorageBackend, StorageConfig};
use crate::infrastructure::memory::{InMemoryPreferenceStorage, UnavailableStorage};
use crate::infrastructure::persistence::{FilePreferenceStorage, SledPreferenceStorage};

/// 按配置打开偏好槽位
///
/// 持久化后端打开失败时退化为不可用槽位：偏好仍可读取（默认值），
/// 但写入会被丢弃
pub fn open_storage(config: &StorageConfig) -> Arc<dyn PreferenceStoragePort> {
    match config.backend {
        StorageBackend::Sled => match SledPreferenceStorage::open(&config.path) {
            Ok(storage) => Arc::new(storage) as Arc<dyn PreferenceStoragePort>,
            Err(e) => unavailable(config, &e.to_string()),
        },
        StorageBackend::File => match FilePreferenceStorage::new(&config.path) {
            Ok(storage) => Arc::new(storage) as Arc<dyn PreferenceStoragePort>,
            Err(e) => unavailable(config, &e.to_string()),
        },
        StorageBackend::Memory => Arc::new(InMemoryPreferenceStorage::new()),
        StorageBackend::None => Arc::new(UnavailableStorage),
    }
}

fn unavailable(config: &StorageConfig, error: &str) -> Arc<dyn PreferenceStoragePort> {
    tracing::warn!(
        backend = config.backend.as_str(),
        path = %config.path.display(),
        error = %error,
        "Durable storage unavailable, voice preferences will not be saved"
    );
    Arc::new(UnavailableStorage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config(backend: StorageBackend, path: PathBuf) -> StorageConfig {
        StorageConfig { backend, path }
    }

    #[test]
    fn test_opens_configured_backend() {
        let dir = tempdir().unwrap();

        let sled = open_storage(&config(StorageBackend::Sled, dir.path().join("db")));
        assert_eq!(sled.backend_name(), "sled");
        assert!(sled.is_durable());

        let file = open_storage(&config(StorageBackend::File, dir.path().join("files")));
        assert_eq!(file.backend_name(), "file");

        let memory = open_storage(&config(StorageBackend::Memory, PathBuf::new()));
        assert_eq!(memory.backend_name(), "memory");
        assert!(memory.is_available());
        assert!(!memory.is_durable());

        let none = open_storage(&config(StorageBackend::None, PathBuf::new()));
        assert!(!none.is_available());
        assert!(!none.is_durable());
    }

    #[test]
    fn test_falls_back_when_path_unusable() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let storage = open_storage(&config(StorageBackend::File, blocker.join("prefs")));
        assert!(!storage.is_available());
        assert_eq!(storage.backend_name(), "none");
    }
}
