//! Voice Context - 音色限界上下文
//!
//! 职责:
//! - 内置音色目录
//! - 音色元数据查询

mod aggregate;
mod catalog;
mod value_objects;

pub use aggregate::Voice;
pub use catalog::{VoiceCatalog, DEFAULT_VOICE_ID};
pub use value_objects::{BookId, SampleRef, VoiceId};
