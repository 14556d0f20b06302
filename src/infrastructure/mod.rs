//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod bootstrap;
pub mod memory;
pub mod persistence;
pub mod state;

pub use bootstrap::open_storage;
pub use memory::{InMemoryPreferenceStorage, UnavailableStorage};
pub use persistence::{FilePreferenceStorage, SledPreferenceStorage};
pub use state::AppState;
