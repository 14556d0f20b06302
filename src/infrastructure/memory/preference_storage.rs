//! In-Memory Preference Storage Implementation

use dashmap::DashMap;
use std::sync::Arc;

use crate::application::ports::{PreferenceStoragePort, StorageError};

/// 内存偏好槽位
///
/// 进程内有效，主要用于测试替身和 `memory` 后端
pub struct InMemoryPreferenceStorage {
    slots: DashMap<String, String>,
    /// 单个值的最大字节数，None 表示不限制
    quota_bytes: Option<usize>,
}

impl InMemoryPreferenceStorage {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
            quota_bytes: None,
        }
    }

    /// 限制单个值的大小，超出时写入失败
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            slots: DashMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryPreferenceStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStoragePort for InMemoryPreferenceStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).map(|v| v.clone()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota_bytes {
            if value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    size: value.len(),
                    limit,
                });
            }
        }
        self.slots.insert(key.to_string(), value.to_string());
        tracing::trace!(key = %key, size = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// 无持久化能力时使用的槽位
///
/// 读取始终为空，写入被丢弃
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl PreferenceStoragePort for UnavailableStorage {
    fn backend_name(&self) -> &'static str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
