//! Memory Layer - In-Memory State Management
//!
//! 实现不落盘的角色仓储，用于测试和 `database.backend = "memory"`

mod character_repo;

pub use character_repo::InMemoryCharacterRepository;
