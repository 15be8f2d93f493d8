//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CharacterRepository）
//! - commands: CQRS 命令及处理器（创建、删除）
//! - queries: CQRS 查询及处理器（详情、列表）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreateCharacterHandler, DeleteCharacterHandler},
    CreateCharacter, DeleteCharacter,
};

pub use error::ApplicationError;

pub use ports::{CharacterRepositoryPort, RepositoryError};

pub use queries::{
    handlers::{GetCharacterHandler, ListCharactersHandler},
    GetCharacter, ListCharacters,
};
