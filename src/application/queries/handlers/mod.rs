//! Query Handlers 实现

mod preference_handlers;
mod voice_handlers;

pub use preference_handlers::*;
pub use voice_handlers::*;
