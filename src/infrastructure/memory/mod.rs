//! Memory Layer - In-Memory Preference Slots
//!
//! 不具备持久化能力的槽位实现：内存槽位（测试替身）与不可用槽位

mod preference_storage;

pub use preference_storage::{InMemoryPreferenceStorage, UnavailableStorage};
