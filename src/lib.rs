//! Bibo - 有声书朗读音色偏好
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 内置音色目录
//! - Preferences Context: 默认音色与按书籍的音色覆盖
//!
//! 应用层 (application/):
//! - Ports: 端口定义（PreferenceStorage）
//! - Store: VoicePreferenceStore
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Persistence: Sled + 文件系统槽位
//! - Memory: 内存槽位、不可用槽位
//! - Bootstrap: 启动时的持久化能力检测

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::VoicePreferenceStore;
pub use config::{load_config, AppConfig};
