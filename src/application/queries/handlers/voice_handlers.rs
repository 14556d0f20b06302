//! Voice Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{GetVoice, ListVoices};
use crate::domain::voice::{Voice, VoiceCatalog};

// ============================================================================
// Response DTOs
// ============================================================================

/// 音色详情响应
#[derive(Debug, Clone, Serialize)]
pub struct VoiceResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sample: String,
}

impl From<&Voice> for VoiceResponse {
    fn from(voice: &Voice) -> Self {
        Self {
            id: voice.id().as_str().to_string(),
            name: voice.name().to_string(),
            description: voice.description().to_string(),
            sample: voice.sample().as_str().to_string(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetVoice Handler
pub struct GetVoiceHandler {
    catalog: Arc<VoiceCatalog>,
}

impl GetVoiceHandler {
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: GetVoice) -> Result<VoiceResponse, ApplicationError> {
        let voice = self
            .catalog
            .get_voice_by_id(query.voice_id.trim())
            .ok_or_else(|| ApplicationError::not_found("Voice", query.voice_id.trim()))?;

        Ok(VoiceResponse::from(voice))
    }
}

/// ListVoices Handler
pub struct ListVoicesHandler {
    catalog: Arc<VoiceCatalog>,
}

impl ListVoicesHandler {
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, _query: ListVoices) -> Result<Vec<VoiceResponse>, ApplicationError> {
        Ok(self
            .catalog
            .list_voices()
            .iter()
            .map(VoiceResponse::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_voices_in_catalog_order() {
        let handler = ListVoicesHandler::new(Arc::new(VoiceCatalog::builtin()));
        let voices = handler.handle(ListVoices).unwrap();
        assert_eq!(voices[0].id, "emily-bright");
        assert_eq!(voices.len(), VoiceCatalog::builtin().len());
    }

    #[test]
    fn test_get_voice() {
        let handler = GetVoiceHandler::new(Arc::new(VoiceCatalog::builtin()));

        let voice = handler
            .handle(GetVoice {
                voice_id: "nova".to_string(),
            })
            .unwrap();
        assert_eq!(voice.name, "Nova");

        let missing = handler.handle(GetVoice {
            voice_id: "missing".to_string(),
        });
        assert!(matches!(
            missing,
            Err(ApplicationError::NotFound {
                resource_type: "Voice",
                ..
            })
        ));
    }
}
