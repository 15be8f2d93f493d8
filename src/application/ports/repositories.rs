//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Character, CharacterId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Character Repository Port
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// 插入新角色，id 已存在时返回 `RepositoryError::Duplicate`
    async fn insert(&self, character: &Character) -> Result<(), RepositoryError>;

    /// 根据 ID 查找角色
    async fn find_by_id(&self, id: CharacterId) -> Result<Option<Character>, RepositoryError>;

    /// 获取所有角色（按 id 升序）
    async fn find_all(&self) -> Result<Vec<Character>, RepositoryError>;

    /// 删除角色，返回是否确实删除了一行
    async fn delete(&self, id: CharacterId) -> Result<bool, RepositoryError>;

    /// 角色总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
