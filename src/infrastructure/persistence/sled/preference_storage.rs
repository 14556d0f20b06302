//! Sled-based Preference Storage Implementation

use sled::Db;
use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{PreferenceStoragePort, StorageError};

/// Sled 偏好存储配置
#[derive(Debug, Clone)]
pub struct SledStorageConfig {
    /// 数据库路径
    pub db_path: String,
}

/// Sled 偏好存储
///
/// key 带 `slot:` 前缀，value 为 UTF-8 JSON
pub struct SledPreferenceStorage {
    db: Db,
}

impl SledPreferenceStorage {
    /// 创建新的存储实例
    pub fn new(config: &SledStorageConfig) -> Result<Self, StorageError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            slots = db.scan_prefix("slot:").count(),
            "SledPreferenceStorage initialized"
        );

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let config = SledStorageConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db
            .flush()
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn slot_key(key: &str) -> String {
        format!("slot:{}", key)
    }
}

impl PreferenceStoragePort for SledPreferenceStorage {
    fn backend_name(&self) -> &'static str {
        "sled"
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.db.get(Self::slot_key(key)) {
            Ok(Some(data)) => {
                let value = String::from_utf8(data.to_vec())
                    .map_err(|e| StorageError::EncodingError(e.to_string()))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::DatabaseError(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db
            .insert(Self::slot_key(key), value.as_bytes())
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;

        // 偏好写入频率很低，每次写入都落盘
        self.flush()?;

        tracing::debug!(key = %key, size_bytes = value.len(), "Slot written");

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .remove(Self::slot_key(key))
            .map_err(|e| StorageError::DatabaseError(e.to_string()))?;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_slot_put_get() {
        let dir = tempdir().unwrap();
        let config = SledStorageConfig {
            db_path: dir.path().join("test.sled").to_string_lossy().to_string(),
        };

        let storage = SledPreferenceStorage::new(&config).unwrap();

        assert!(storage.read("prefs").unwrap().is_none());

        storage.write("prefs", r#"{"a":1}"#).unwrap();
        assert_eq!(storage.read("prefs").unwrap().as_deref(), Some(r#"{"a":1}"#));

        storage.remove("prefs").unwrap();
        assert!(storage.read("prefs").unwrap().is_none());
    }

    #[test]
    fn test_slot_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sled");

        {
            let storage = SledPreferenceStorage::open(&path).unwrap();
            storage.write("prefs", "persisted").unwrap();
        }

        let storage = SledPreferenceStorage::open(&path).unwrap();
        assert_eq!(storage.read("prefs").unwrap().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_store_scenario_on_sled() {
        use crate::application::VoicePreferenceStore;

        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.sled");

        {
            let store = VoicePreferenceStore::new(SledPreferenceStorage::open(&path).unwrap().arc());
            store.set_default_voice("nova");
            store.set_book_voice("book-42", "onyx");
        }

        let store = VoicePreferenceStore::new(SledPreferenceStorage::open(&path).unwrap().arc());
        assert_eq!(store.resolve("book-42").as_str(), "onyx");
        assert_eq!(store.resolve("book-99").as_str(), "nova");
    }

    #[test]
    fn test_non_utf8_value_is_encoding_error() {
        let dir = tempdir().unwrap();
        let storage = SledPreferenceStorage::open(dir.path().join("test.sled")).unwrap();
        storage
            .db
            .insert(SledPreferenceStorage::slot_key("prefs"), &[0xff, 0xfe][..])
            .unwrap();

        assert!(matches!(
            storage.read("prefs"),
            Err(StorageError::EncodingError(_))
        ));
    }
}
