//! HTTP Handlers

mod character;
mod ping;

pub use character::*;
pub use ping::*;
