//! Character Queries

use crate::domain::CharacterId;

/// 获取角色详情查询
#[derive(Debug, Clone)]
pub struct GetCharacter {
    pub character_id: CharacterId,
}

/// 列出所有角色查询
#[derive(Debug, Clone)]
pub struct ListCharacters;
