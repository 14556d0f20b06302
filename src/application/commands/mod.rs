//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有偏好修改

mod preference_commands;

pub mod handlers;

pub use preference_commands::*;
