//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

use super::DEFAULT_VOICE_ID;

/// 音色唯一标识（如 `emily-bright`）
///
/// 不校验是否存在于音色目录中，只保证非空
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("音色 ID 不能为空");
        }
        Ok(Self(id))
    }

    /// 持久化记录中的非空值，原样保留（可能含空白字符）
    pub(crate) fn from_stored(id: &str) -> Self {
        Self(id.to_string())
    }

    /// 系统默认音色
    pub fn system_default() -> Self {
        Self(DEFAULT_VOICE_ID.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 书籍唯一标识
///
/// 原样作为偏好记录的 key，不裁剪、不限长度，只拒绝空白 ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Result<Self, &'static str> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("书籍 ID 不能为空");
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 试听样本引用（静态资源路径）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRef(String);

impl SampleRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否指向真实样本（占位音色没有样本）
    pub fn is_available(&self) -> bool {
        !self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_id_rejects_blank() {
        assert!(VoiceId::new("").is_err());
        assert!(VoiceId::new("   ").is_err());
        assert_eq!(VoiceId::new("nova").unwrap().as_str(), "nova");
    }

    #[test]
    fn test_book_id_is_kept_verbatim() {
        let id = BookId::new("  book-42 ").unwrap();
        assert_eq!(id.as_str(), "  book-42 ");
        assert!(BookId::new(" ").is_err());

        let long = "x".repeat(1000);
        assert_eq!(BookId::new(long.clone()).unwrap().as_str(), long);
    }

    #[test]
    fn test_voice_id_serializes_as_plain_string() {
        let id = VoiceId::new("onyx").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"onyx\"");
    }
}
