//! Voice Preference Store - 音色偏好存储
//!
//! 偏好记录的唯一读写入口：
//! - 读：存储不可用、记录缺失或损坏时回退到内置默认记录
//! - 写：每次修改都是完整的 load-modify-save，整值覆盖槽位
//! - 所有存储错误在本层记录日志后吞掉，不向调用方传播

use parking_lot::Mutex;
use std::sync::Arc;

use crate::application::ports::{PreferenceStoragePort, PREFERENCES_SLOT_KEY};
use crate::domain::preferences::VoicePreferences;
use crate::domain::voice::{BookId, VoiceId};

/// 日志中损坏记录的最大展示长度
const MALFORMED_PREVIEW_CHARS: usize = 120;

/// 音色偏好存储
pub struct VoicePreferenceStore {
    storage: Arc<dyn PreferenceStoragePort>,
    /// 串行化 load-modify-save，避免并发修改丢失更新
    write_lock: Mutex<()>,
}

impl VoicePreferenceStore {
    pub fn new(storage: Arc<dyn PreferenceStoragePort>) -> Self {
        tracing::debug!(
            backend = storage.backend_name(),
            available = storage.is_available(),
            durable = storage.is_durable(),
            "VoicePreferenceStore initialized"
        );
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 偏好是否会在进程退出后保留
    pub fn is_persistent(&self) -> bool {
        self.storage.is_available() && self.storage.is_durable()
    }

    /// 读取偏好记录
    ///
    /// 从不失败：
    /// - 存储不可用 → 内置默认记录（不做 I/O）
    /// - 槽位为空 → 内置默认记录
    /// - 记录损坏 → 记录日志，内置默认记录
    /// - 记录有效 → 原样返回
    pub fn load(&self) -> VoicePreferences {
        if !self.storage.is_available() {
            return VoicePreferences::default();
        }

        let raw = match self.storage.read(PREFERENCES_SLOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return VoicePreferences::default(),
            Err(e) => {
                tracing::warn!(
                    backend = self.storage.backend_name(),
                    error = %e,
                    "Failed to read voice preferences, using defaults"
                );
                return VoicePreferences::default();
            }
        };

        match VoicePreferences::from_json(&raw) {
            Ok(preferences) => preferences,
            Err(e) => {
                tracing::warn!(
                    backend = self.storage.backend_name(),
                    error = %e,
                    raw = %preview(&raw),
                    "Discarding malformed voice preferences, using defaults"
                );
                VoicePreferences::default()
            }
        }
    }

    /// 覆盖写入偏好记录
    ///
    /// 存储不可用时为空操作；序列化或写入失败只记录日志
    pub fn save(&self, preferences: &VoicePreferences) {
        if !self.storage.is_available() {
            tracing::debug!("No storage available, voice preferences not saved");
            return;
        }

        let serialized = match preferences.to_json() {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize voice preferences");
                return;
            }
        };

        if let Err(e) = self.storage.write(PREFERENCES_SLOT_KEY, &serialized) {
            tracing::error!(
                backend = self.storage.backend_name(),
                error = %e,
                "Failed to save voice preferences"
            );
        }
    }

    /// 设置默认音色（不校验音色目录）
    ///
    /// 空 ID 会被忽略，以保证默认音色始终非空
    pub fn set_default_voice(&self, voice_id: &str) -> VoicePreferences {
        let _guard = self.write_lock.lock();
        let mut preferences = self.load();

        match VoiceId::new(voice_id) {
            Ok(voice_id) => {
                preferences.set_default_voice(&voice_id);
                self.save(&preferences);
                tracing::info!(voice_id = %voice_id, "Default voice updated");
            }
            Err(e) => {
                tracing::warn!(error = e, "Ignoring blank default voice");
            }
        }

        preferences
    }

    /// 设置书籍音色，覆盖已有设置
    ///
    /// 空音色 ID 等同于删除该书籍的设置
    pub fn set_book_voice(&self, book_id: &str, voice_id: &str) -> VoicePreferences {
        let _guard = self.write_lock.lock();
        let mut preferences = self.load();

        let book_id = match BookId::new(book_id) {
            Ok(book_id) => book_id,
            Err(e) => {
                tracing::warn!(error = e, "Ignoring book voice for blank book id");
                return preferences;
            }
        };

        match VoiceId::new(voice_id) {
            Ok(voice_id) => {
                let previous = preferences.set_book_voice(&book_id, &voice_id);
                tracing::info!(
                    book_id = %book_id,
                    voice_id = %voice_id,
                    previous = ?previous,
                    "Book voice updated"
                );
            }
            Err(_) => {
                preferences.remove_book_voice(&book_id);
                tracing::info!(book_id = %book_id, "Blank book voice, override removed");
            }
        }

        self.save(&preferences);
        preferences
    }

    /// 删除书籍音色，不存在时为空操作
    pub fn remove_book_voice(&self, book_id: &str) -> VoicePreferences {
        let _guard = self.write_lock.lock();
        let mut preferences = self.load();

        if let Ok(book_id) = BookId::new(book_id) {
            let removed = preferences.remove_book_voice(&book_id);
            tracing::info!(
                book_id = %book_id,
                removed = removed.is_some(),
                "Book voice removed"
            );
        }

        self.save(&preferences);
        preferences
    }

    /// 恢复内置默认记录
    ///
    /// 删除整个槽位，之后的读取回到内置默认记录
    pub fn reset(&self) -> VoicePreferences {
        let _guard = self.write_lock.lock();

        if self.storage.is_available() {
            match self.storage.remove(PREFERENCES_SLOT_KEY) {
                Ok(()) => tracing::info!("Voice preferences reset to defaults"),
                Err(e) => tracing::error!(
                    backend = self.storage.backend_name(),
                    error = %e,
                    "Failed to reset voice preferences"
                ),
            }
        }

        VoicePreferences::default()
    }

    /// 解析书籍的实际朗读音色，结果始终非空
    pub fn resolve(&self, book_id: &str) -> VoiceId {
        let voice_id = self.load().resolve(book_id);
        tracing::debug!(book_id = %book_id, voice_id = %voice_id, "Resolved book voice");
        voice_id
    }

    /// 书籍是否有独立设置
    pub fn has_book_voice(&self, book_id: &str) -> bool {
        self.load().has_override(book_id)
    }

    /// 按书籍 ID 排序的覆盖列表
    pub fn book_overrides(&self) -> Vec<(String, String)> {
        self.load().book_overrides()
    }
}

fn preview(raw: &str) -> String {
    if raw.chars().count() <= MALFORMED_PREVIEW_CHARS {
        raw.to_string()
    } else {
        let head: String = raw.chars().take(MALFORMED_PREVIEW_CHARS).collect();
        format!("{}...", head)
    }
}
