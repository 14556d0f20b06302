//! Preference Queries

/// 获取当前偏好查询
#[derive(Debug, Clone)]
pub struct GetPreferences;

/// 解析书籍实际音色查询
#[derive(Debug, Clone)]
pub struct ResolveVoice {
    pub book_id: String,
}
