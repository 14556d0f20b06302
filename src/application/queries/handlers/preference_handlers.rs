//! Preference Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetPreferences, ResolveVoice};
use crate::application::store::VoicePreferenceStore;
use crate::domain::preferences::VoicePreferences;
use crate::domain::voice::{BookId, VoiceCatalog};

// ============================================================================
// Response DTOs
// ============================================================================

/// 单本书的音色设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookVoiceEntry {
    pub book_id: String,
    pub voice_id: String,
}

/// 偏好响应
#[derive(Debug, Clone, Serialize)]
pub struct PreferencesResponse {
    pub default_voice_id: String,
    /// 按书籍 ID 排序
    pub book_voices: Vec<BookVoiceEntry>,
    /// 偏好是否会被持久化
    pub persistent: bool,
}

impl PreferencesResponse {
    pub fn from_preferences(preferences: &VoicePreferences, persistent: bool) -> Self {
        Self {
            default_voice_id: preferences.default_voice_id().to_string(),
            book_voices: preferences
                .book_overrides()
                .into_iter()
                .map(|(book_id, voice_id)| BookVoiceEntry { book_id, voice_id })
                .collect(),
            persistent,
        }
    }
}

/// 实际音色响应
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedVoiceResponse {
    pub book_id: String,
    pub voice_id: String,
    pub voice_name: String,
    pub voice_description: String,
    pub sample: Option<String>,
    /// 是否来自书籍独立设置
    pub from_book_override: bool,
    /// 音色目录中是否存在
    pub in_catalog: bool,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetPreferences Handler
pub struct GetPreferencesHandler {
    store: Arc<VoicePreferenceStore>,
}

impl GetPreferencesHandler {
    pub fn new(store: Arc<VoicePreferenceStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _query: GetPreferences) -> Result<PreferencesResponse, ApplicationError> {
        let preferences = self.store.load();
        Ok(PreferencesResponse::from_preferences(
            &preferences,
            self.store.is_persistent(),
        ))
    }
}

/// ResolveVoice Handler
///
/// 解析实际音色并附带目录元数据，目录中不存在时使用占位音色
pub struct ResolveVoiceHandler {
    store: Arc<VoicePreferenceStore>,
    catalog: Arc<VoiceCatalog>,
}

impl ResolveVoiceHandler {
    pub fn new(store: Arc<VoicePreferenceStore>, catalog: Arc<VoiceCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn handle(&self, query: ResolveVoice) -> Result<ResolvedVoiceResponse, ApplicationError> {
        let book_id = BookId::new(query.book_id).map_err(ApplicationError::validation)?;

        let preferences = self.store.load();
        let voice_id = preferences.resolve(book_id.as_str());
        let from_book_override = preferences.has_override(book_id.as_str());

        let in_catalog = self.catalog.get_voice_by_id(voice_id.as_str()).is_some();
        if !in_catalog {
            tracing::warn!(
                book_id = %book_id,
                voice_id = %voice_id,
                "Resolved voice not in catalog, using placeholder"
            );
        }
        let voice = self.catalog.get_or_placeholder(&voice_id);

        Ok(ResolvedVoiceResponse {
            book_id: book_id.as_str().to_string(),
            voice_id: voice_id.into_inner(),
            voice_name: voice.name().to_string(),
            voice_description: voice.description().to_string(),
            sample: voice
                .sample()
                .is_available()
                .then(|| voice.sample().as_str().to_string()),
            from_book_override,
            in_catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{InMemoryPreferenceStorage, UnavailableStorage};

    fn store() -> Arc<VoicePreferenceStore> {
        VoicePreferenceStore::new(InMemoryPreferenceStorage::new().arc()).arc()
    }

    #[test]
    fn test_get_preferences() {
        let store = store();
        store.set_default_voice("nova");
        store.set_book_voice("b2", "onyx");
        store.set_book_voice("b1", "fable");

        let response = GetPreferencesHandler::new(store)
            .handle(GetPreferences)
            .unwrap();

        assert_eq!(response.default_voice_id, "nova");
        assert_eq!(response.book_voices[0].book_id, "b1");
        assert_eq!(response.book_voices[1].voice_id, "onyx");
        // 内存槽位进程退出即丢失
        assert!(!response.persistent);
    }

    #[test]
    fn test_get_preferences_without_storage() {
        let store = VoicePreferenceStore::new(Arc::new(UnavailableStorage)).arc();
        let response = GetPreferencesHandler::new(store)
            .handle(GetPreferences)
            .unwrap();
        assert_eq!(response.default_voice_id, "emily-bright");
        assert!(response.book_voices.is_empty());
        assert!(!response.persistent);
    }

    #[test]
    fn test_resolve_with_catalog_metadata() {
        let store = store();
        store.set_book_voice("book-42", "onyx");
        let handler = ResolveVoiceHandler::new(store, Arc::new(VoiceCatalog::builtin()));

        let resolved = handler
            .handle(ResolveVoice {
                book_id: "book-42".to_string(),
            })
            .unwrap();
        assert_eq!(resolved.voice_id, "onyx");
        assert_eq!(resolved.voice_name, "Onyx");
        assert!(resolved.from_book_override);
        assert!(resolved.in_catalog);
        assert_eq!(resolved.sample.as_deref(), Some("/voices/samples/onyx.mp3"));

        let fallback = handler
            .handle(ResolveVoice {
                book_id: "book-99".to_string(),
            })
            .unwrap();
        assert_eq!(fallback.voice_id, "emily-bright");
        assert!(!fallback.from_book_override);
    }

    #[test]
    fn test_resolve_unknown_voice_uses_placeholder() {
        let store = store();
        store.set_default_voice("retired-voice");
        let handler = ResolveVoiceHandler::new(store, Arc::new(VoiceCatalog::builtin()));

        let resolved = handler
            .handle(ResolveVoice {
                book_id: "book-1".to_string(),
            })
            .unwrap();
        assert_eq!(resolved.voice_id, "retired-voice");
        assert_eq!(resolved.voice_name, "Unknown voice");
        assert!(!resolved.in_catalog);
        assert!(resolved.sample.is_none());
    }

    #[test]
    fn test_resolve_rejects_blank_book() {
        let handler = ResolveVoiceHandler::new(store(), Arc::new(VoiceCatalog::builtin()));
        let result = handler.handle(ResolveVoice {
            book_id: "  ".to_string(),
        });
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }
}
