//! SQLite Persistence - SQLite 数据库持久化实现

mod character_repo;
mod database;

pub use character_repo::*;
pub use database::*;
