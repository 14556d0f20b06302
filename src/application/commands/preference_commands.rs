//! Preference Commands

/// 设置默认音色命令
#[derive(Debug, Clone)]
pub struct SetDefaultVoice {
    pub voice_id: String,
}

/// 设置书籍音色命令
#[derive(Debug, Clone)]
pub struct SetBookVoice {
    pub book_id: String,
    pub voice_id: String,
}

/// 删除书籍音色命令
#[derive(Debug, Clone)]
pub struct RemoveBookVoice {
    pub book_id: String,
}

/// 恢复默认偏好命令
#[derive(Debug, Clone)]
pub struct ResetPreferences;
