//! Voice Context - Catalog Entry

use serde::{Deserialize, Serialize};

use super::{SampleRef, VoiceId};

/// 朗读音色
///
/// 不变量:
/// - 音色目录中的 Voice 在编译期确定，运行期只读
/// - 占位音色（目录中不存在的 ID）没有试听样本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    id: VoiceId,
    name: String,
    description: String,
    sample: SampleRef,
}

impl Voice {
    pub fn new(
        id: VoiceId,
        name: impl Into<String>,
        description: impl Into<String>,
        sample: SampleRef,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            sample,
        }
    }

    /// 目录中找不到该 ID 时展示的占位音色
    pub fn placeholder(id: VoiceId) -> Self {
        Self {
            id,
            name: "Unknown voice".to_string(),
            description: "This voice is no longer available.".to_string(),
            sample: SampleRef::new(""),
        }
    }

    /// 是否为占位音色
    pub fn is_placeholder(&self) -> bool {
        !self.sample.is_available()
    }

    // Getters
    pub fn id(&self) -> &VoiceId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sample(&self) -> &SampleRef {
        &self.sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_creation() {
        let voice = Voice::new(
            VoiceId::new("nova").unwrap(),
            "Nova",
            "Bright and energetic",
            SampleRef::new("/samples/nova.mp3"),
        );

        assert_eq!(voice.id().as_str(), "nova");
        assert_eq!(voice.name(), "Nova");
        assert!(!voice.is_placeholder());
    }

    #[test]
    fn test_placeholder_keeps_requested_id() {
        let voice = Voice::placeholder(VoiceId::new("retired-voice").unwrap());
        assert_eq!(voice.id().as_str(), "retired-voice");
        assert!(voice.is_placeholder());
    }
}
