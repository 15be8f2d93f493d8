//! Character Context - 角色限界上下文
//!
//! 职责:
//! - 角色属性的校验（值对象保证不变量）
//! - 从未类型化的 JSON 负载构建角色
//! - 列表视图投影

mod aggregate;
mod errors;
mod validation;
mod value_objects;

pub use aggregate::{Character, CharacterAttributes, CharacterSummary};
pub use errors::{FieldError, ValidationErrors};
pub use validation::{messages, CharacterDraft};
pub use value_objects::{Attribute, CharacterId, Magnitude};
