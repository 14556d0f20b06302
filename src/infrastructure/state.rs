//! Application State
//!
//! 持有偏好存储、音色目录与所有 Command/Query Handlers，
//! 展示层只通过这里访问偏好

use std::sync::Arc;

use crate::application::{
    // Command handlers
    RemoveBookVoiceHandler, ResetPreferencesHandler, SetBookVoiceHandler, SetDefaultVoiceHandler,
    // Query handlers
    GetPreferencesHandler, GetVoiceHandler, ListVoicesHandler, ResolveVoiceHandler,
    // Store
    PreferenceStoragePort, VoicePreferenceStore,
};
use crate::config::AppConfig;
use crate::domain::voice::VoiceCatalog;
use crate::infrastructure::bootstrap::open_storage;

/// 应用状态
pub struct AppState {
    pub store: Arc<VoicePreferenceStore>,
    pub catalog: Arc<VoiceCatalog>,

    // ========== Command Handlers ==========
    pub set_default_voice_handler: SetDefaultVoiceHandler,
    pub set_book_voice_handler: SetBookVoiceHandler,
    pub remove_book_voice_handler: RemoveBookVoiceHandler,
    pub reset_preferences_handler: ResetPreferencesHandler,

    // ========== Query Handlers ==========
    pub get_preferences_handler: GetPreferencesHandler,
    pub resolve_voice_handler: ResolveVoiceHandler,
    pub get_voice_handler: GetVoiceHandler,
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(storage: Arc<dyn PreferenceStoragePort>, catalog: VoiceCatalog) -> Self {
        let store = VoicePreferenceStore::new(storage).arc();
        let catalog = Arc::new(catalog);

        Self {
            store: store.clone(),
            catalog: catalog.clone(),

            // Command handlers
            set_default_voice_handler: SetDefaultVoiceHandler::new(store.clone()),
            set_book_voice_handler: SetBookVoiceHandler::new(store.clone()),
            remove_book_voice_handler: RemoveBookVoiceHandler::new(store.clone()),
            reset_preferences_handler: ResetPreferencesHandler::new(store.clone()),

            // Query handlers
            get_preferences_handler: GetPreferencesHandler::new(store.clone()),
            resolve_voice_handler: ResolveVoiceHandler::new(store.clone(), catalog.clone()),
            get_voice_handler: GetVoiceHandler::new(catalog.clone()),
            list_voices_handler: ListVoicesHandler::new(catalog),
        }
    }

    /// 按配置打开存储并使用内置音色目录
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(open_storage(&config.storage), VoiceCatalog::builtin())
    }
}
