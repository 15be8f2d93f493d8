//! Data Transfer Objects
//!
//! 线上 JSON 的键按字典序输出，字段声明顺序即输出顺序。

use serde::Serialize;

use crate::domain::{Character, CharacterId, CharacterSummary, FieldError};

// ============================================================================
// Character DTOs
// ============================================================================

/// 角色详情（全部列）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterResponse {
    pub birth_year: i64,
    pub eye_color: String,
    pub hair_color: String,
    pub height: i64,
    pub id: i64,
    pub mass: i64,
    pub name: String,
    pub skin_color: String,
}

impl From<&Character> for CharacterResponse {
    fn from(c: &Character) -> Self {
        Self {
            birth_year: c.birth_year().get(),
            eye_color: c.eye_color().to_string(),
            hair_color: c.hair_color().to_string(),
            height: c.height().get(),
            id: c.id().as_i64(),
            mass: c.mass().get(),
            name: c.name().to_string(),
            skin_color: c.skin_color().to_string(),
        }
    }
}

/// 列表项（不含发色与肤色）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterSummaryResponse {
    pub birth_year: i64,
    pub eye_color: String,
    pub height: i64,
    pub id: i64,
    pub mass: i64,
    pub name: String,
}

impl From<CharacterSummary> for CharacterSummaryResponse {
    fn from(s: CharacterSummary) -> Self {
        Self {
            birth_year: s.birth_year,
            eye_color: s.eye_color,
            height: s.height,
            id: s.id.as_i64(),
            mass: s.mass,
            name: s.name,
        }
    }
}

/// 删除成功的提示
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub info: String,
}

impl InfoResponse {
    pub fn deleted(id: CharacterId) -> Self {
        Self {
            info: format!("Character with id '{}' was deleted", id),
        }
    }
}

// ============================================================================
// Error DTOs
// ============================================================================

/// 单条错误信息
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// 字段校验错误列表
#[derive(Debug, Serialize)]
pub struct FieldErrorsResponse {
    pub errors: Vec<FieldError>,
}
