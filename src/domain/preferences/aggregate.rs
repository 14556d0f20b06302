//! Preferences Context - Aggregate Root

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::PreferenceError;
use crate::domain::voice::{BookId, VoiceId, DEFAULT_VOICE_ID};

/// 用户朗读音色偏好
///
/// 持久化格式（JSON）:
/// `{ "defaultVoiceId": string, "bookVoicePreferences": { [bookId]: string } }`
///
/// 不变量:
/// - 通过本类型的方法修改后，`default_voice_id` 始终非空
/// - `book_voice_preferences` 不保存空值，删除即移除 key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicePreferences {
    default_voice_id: String,
    book_voice_preferences: HashMap<String, String>,
}

impl Default for VoicePreferences {
    fn default() -> Self {
        Self {
            default_voice_id: DEFAULT_VOICE_ID.to_string(),
            book_voice_preferences: HashMap::new(),
        }
    }
}

impl VoicePreferences {
    /// 从持久化 JSON 解析
    ///
    /// 字段缺失或类型不符都视为格式错误，不做字段补齐
    pub fn from_json(raw: &str) -> Result<Self, PreferenceError> {
        serde_json::from_str(raw).map_err(|e| PreferenceError::MalformedRecord(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, PreferenceError> {
        serde_json::to_string(self).map_err(|e| PreferenceError::SerializationError(e.to_string()))
    }

    /// 持久化记录中的默认音色（原样返回，可能为空）
    pub fn default_voice_id(&self) -> &str {
        &self.default_voice_id
    }

    pub fn book_voice(&self, book_id: &str) -> Option<&str> {
        self.book_voice_preferences.get(book_id).map(String::as_str)
    }

    pub fn book_voice_preferences(&self) -> &HashMap<String, String> {
        &self.book_voice_preferences
    }

    /// 按书籍 ID 排序的覆盖列表
    pub fn book_overrides(&self) -> Vec<(String, String)> {
        let mut overrides: Vec<(String, String)> = self
            .book_voice_preferences
            .iter()
            .map(|(book, voice)| (book.clone(), voice.clone()))
            .collect();
        overrides.sort();
        overrides
    }

    pub fn set_default_voice(&mut self, voice_id: &VoiceId) {
        self.default_voice_id = voice_id.as_str().to_string();
    }

    /// 设置书籍音色，返回被覆盖的旧值
    pub fn set_book_voice(&mut self, book_id: &BookId, voice_id: &VoiceId) -> Option<String> {
        self.book_voice_preferences
            .insert(book_id.as_str().to_string(), voice_id.as_str().to_string())
    }

    /// 删除书籍音色，不存在时返回 None
    pub fn remove_book_voice(&mut self, book_id: &BookId) -> Option<String> {
        self.book_voice_preferences.remove(book_id.as_str())
    }

    /// 解析书籍的实际朗读音色
    ///
    /// 优先级: 书籍覆盖 > 用户默认 > 系统默认
    ///
    /// 只跳过空字符串，非空值（包括纯空白）原样返回
    pub fn resolve(&self, book_id: &str) -> VoiceId {
        let candidate = self
            .book_voice(book_id)
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_voice_id.as_str());

        if candidate.is_empty() {
            VoiceId::system_default()
        } else {
            VoiceId::from_stored(candidate)
        }
    }

    /// 书籍是否有有效覆盖
    pub fn has_override(&self, book_id: &str) -> bool {
        self.book_voice(book_id)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }
}
