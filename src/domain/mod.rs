//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Character Context: 角色表管理

pub mod character;

pub use character::{
    Attribute, Character, CharacterAttributes, CharacterDraft, CharacterId, CharacterSummary,
    FieldError, Magnitude, ValidationErrors,
};
