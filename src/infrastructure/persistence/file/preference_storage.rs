//! File Storage - 文件系统偏好存储实现
//!
//! 每个槽位对应目录下的一个 `<key>.json` 文件

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{PreferenceStoragePort, StorageError};

/// 文件系统偏好存储
pub struct FilePreferenceStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FilePreferenceStorage {
    /// 创建新的文件存储
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir).map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::info!(base_dir = %base_dir.display(), "FilePreferenceStorage initialized");

        Ok(Self { base_dir })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 槽位文件路径
    ///
    /// key 中除字母数字、`-`、`_` 以外的字符替换为 `_`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{}.json", file_name))
    }
}

impl PreferenceStoragePort for FilePreferenceStorage {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);

        match fs::read(&path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|e| StorageError::EncodingError(e.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let tmp_path = path.with_extension("json.tmp");

        // 先写临时文件再重命名，避免留下半截记录
        fs::write(&tmp_path, value).map_err(|e| StorageError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &path).map_err(|e| StorageError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            size_bytes = value.len(),
            "Slot written"
        );

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Slot removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_slot_lifecycle() {
        let dir = tempdir().unwrap();
        let storage = FilePreferenceStorage::new(dir.path().join("prefs")).unwrap();

        assert!(storage.read("bibo-voice-preferences").unwrap().is_none());

        storage.write("bibo-voice-preferences", "{}").unwrap();
        assert_eq!(
            storage.read("bibo-voice-preferences").unwrap().as_deref(),
            Some("{}")
        );
        assert!(storage.slot_path("bibo-voice-preferences").exists());

        storage.remove("bibo-voice-preferences").unwrap();
        assert!(storage.read("bibo-voice-preferences").unwrap().is_none());
        assert!(storage.remove("bibo-voice-preferences").is_ok());
    }

    #[test]
    fn test_slot_path_is_sanitized() {
        let dir = tempdir().unwrap();
        let storage = FilePreferenceStorage::new(dir.path()).unwrap();
        let path = storage.slot_path("../etc/passwd");
        assert_eq!(path, dir.path().join("___etc_passwd.json"));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let storage = FilePreferenceStorage::new(dir.path()).unwrap();
        storage.write("k", "value").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["k.json".to_string()]);
    }
}
