//! Preference Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    RemoveBookVoice, ResetPreferences, SetBookVoice, SetDefaultVoice,
};
use crate::application::error::ApplicationError;
use crate::application::queries::handlers::PreferencesResponse;
use crate::application::store::VoicePreferenceStore;
use crate::domain::voice::{BookId, VoiceId};

// ============================================================================
// SetDefaultVoice
// ============================================================================

/// SetDefaultVoice Handler
///
/// 不校验音色目录，未知 ID 原样保存
pub struct SetDefaultVoiceHandler {
    store: Arc<VoicePreferenceStore>,
}

impl SetDefaultVoiceHandler {
    pub fn new(store: Arc<VoicePreferenceStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: SetDefaultVoice) -> Result<PreferencesResponse, ApplicationError> {
        let voice_id = VoiceId::new(command.voice_id).map_err(ApplicationError::validation)?;

        let preferences = self.store.set_default_voice(voice_id.as_str());

        Ok(PreferencesResponse::from_preferences(
            &preferences,
            self.store.is_persistent(),
        ))
    }
}

// ============================================================================
// SetBookVoice
// ============================================================================

/// SetBookVoice Handler
pub struct SetBookVoiceHandler {
    store: Arc<VoicePreferenceStore>,
}

impl SetBookVoiceHandler {
    pub fn new(store: Arc<VoicePreferenceStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: SetBookVoice) -> Result<PreferencesResponse, ApplicationError> {
        let book_id = BookId::new(command.book_id).map_err(ApplicationError::validation)?;
        let voice_id = VoiceId::new(command.voice_id).map_err(ApplicationError::validation)?;

        let preferences = self
            .store
            .set_book_voice(book_id.as_str(), voice_id.as_str());

        Ok(PreferencesResponse::from_preferences(
            &preferences,
            self.store.is_persistent(),
        ))
    }
}

// ============================================================================
// RemoveBookVoice
// ============================================================================

/// RemoveBookVoice Handler
pub struct RemoveBookVoiceHandler {
    store: Arc<VoicePreferenceStore>,
}

impl RemoveBookVoiceHandler {
    pub fn new(store: Arc<VoicePreferenceStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: RemoveBookVoice) -> Result<PreferencesResponse, ApplicationError> {
        let book_id = BookId::new(command.book_id).map_err(ApplicationError::validation)?;

        let preferences = self.store.remove_book_voice(book_id.as_str());

        Ok(PreferencesResponse::from_preferences(
            &preferences,
            self.store.is_persistent(),
        ))
    }
}

// ============================================================================
// ResetPreferences
// ============================================================================

/// ResetPreferences Handler
pub struct ResetPreferencesHandler {
    store: Arc<VoicePreferenceStore>,
}

impl ResetPreferencesHandler {
    pub fn new(store: Arc<VoicePreferenceStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, _command: ResetPreferences) -> Result<PreferencesResponse, ApplicationError> {
        let preferences = self.store.reset();
        Ok(PreferencesResponse::from_preferences(
            &preferences,
            self.store.is_persistent(),
        ))
    }
}
