//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::{CharacterId, ValidationErrors};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found")]
    NotFound {
        resource_type: &'static str,
        id: CharacterId,
    },

    /// 资源已存在（id 冲突）
    #[error("{resource_type} with this ID already exists")]
    AlreadyExists {
        resource_type: &'static str,
        id: CharacterId,
    },

    /// 字段校验失败
    #[error(transparent)]
    InvalidFields(#[from] ValidationErrors),

    /// 负载整体无效（例如不是 JSON 对象）
    #[error("{0}")]
    InvalidPayload(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: CharacterId) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建 AlreadyExists 错误
    pub fn already_exists(resource_type: &'static str, id: CharacterId) -> Self {
        Self::AlreadyExists { resource_type, id }
    }

    /// 创建负载错误
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_contract() {
        let id = CharacterId::new(3);
        assert_eq!(
            ApplicationError::not_found("Character", id).to_string(),
            "Character not found"
        );
        assert_eq!(
            ApplicationError::already_exists("Character", id).to_string(),
            "Character with this ID already exists"
        );
    }
}
