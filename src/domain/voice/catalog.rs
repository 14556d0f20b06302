//! Voice Catalog - 编译期内置的音色目录
//!
//! 顺序即声明顺序，列表展示时保持稳定

use super::{SampleRef, Voice, VoiceId};

/// 系统默认音色
pub const DEFAULT_VOICE_ID: &str = "emily-bright";

/// (id, 名称, 描述)
const VOICES: &[(&str, &str, &str)] = &[
    (
        "emily-bright",
        "Emily",
        "Bright, friendly narration suited to contemporary fiction",
    ),
    (
        "james-warm",
        "James",
        "Warm baritone for memoirs and long-form non-fiction",
    ),
    (
        "sophia-calm",
        "Sophia",
        "Calm and measured, ideal for self-help and meditation",
    ),
    (
        "marcus-deep",
        "Marcus",
        "Deep, dramatic delivery for thrillers and epics",
    ),
    (
        "olivia-gentle",
        "Olivia",
        "Gentle storyteller for children's books",
    ),
    ("alloy", "Alloy", "Neutral and balanced"),
    ("echo", "Echo", "Clear, crisp male voice"),
    ("fable", "Fable", "Expressive British storyteller"),
    ("onyx", "Onyx", "Rich, authoritative male voice"),
    ("nova", "Nova", "Energetic, youthful female voice"),
    ("shimmer", "Shimmer", "Soft and soothing female voice"),
];

/// 音色目录
///
/// 只读查找数据，偏好存储不依赖它做校验
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    /// 内置音色目录
    pub fn builtin() -> Self {
        let voices = VOICES
            .iter()
            .filter_map(|(id, name, description)| {
                VoiceId::new(*id).ok().map(|voice_id| {
                    Voice::new(
                        voice_id,
                        *name,
                        *description,
                        SampleRef::new(format!("/voices/samples/{}.mp3", id)),
                    )
                })
            })
            .collect();
        Self { voices }
    }

    /// 自定义目录（测试用）
    pub fn from_voices(voices: Vec<Voice>) -> Self {
        Self { voices }
    }

    /// 按声明顺序列出所有音色
    pub fn list_voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn get_voice_by_id(&self, id: &str) -> Option<&Voice> {
        self.voices.iter().find(|v| v.id().as_str() == id)
    }

    /// 查找音色，不存在时返回占位音色
    pub fn get_or_placeholder(&self, id: &VoiceId) -> Voice {
        self.get_voice_by_id(id.as_str())
            .cloned()
            .unwrap_or_else(|| Voice::placeholder(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
