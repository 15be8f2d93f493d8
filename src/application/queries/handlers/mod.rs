//! Query Handlers 实现

mod character_handlers;

pub use character_handlers::*;
