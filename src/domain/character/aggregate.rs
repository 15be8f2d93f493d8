//! Character Context - Aggregate Root

use super::{Attribute, CharacterId, Magnitude};

/// 角色的可变属性集合（除 id 以外的全部列）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterAttributes {
    pub name: Attribute,
    pub height: Magnitude,
    pub mass: Magnitude,
    pub hair_color: Attribute,
    pub skin_color: Attribute,
    pub eye_color: Attribute,
    pub birth_year: Magnitude,
}

/// Character 聚合根
///
/// 不变量:
/// - 文本属性非空，度量属性为正整数（由值对象保证）
/// - id 由调用方指定，唯一性由仓储保证
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    attributes: CharacterAttributes,
}

/// 列表视图（不含发色与肤色）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    pub id: CharacterId,
    pub name: String,
    pub height: i64,
    pub mass: i64,
    pub birth_year: i64,
    pub eye_color: String,
}

impl Character {
    pub fn new(id: CharacterId, attributes: CharacterAttributes) -> Self {
        Self { id, attributes }
    }

    /// 生成列表视图投影
    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary {
            id: self.id,
            name: self.attributes.name.as_str().to_string(),
            height: self.attributes.height.get(),
            mass: self.attributes.mass.get(),
            birth_year: self.attributes.birth_year.get(),
            eye_color: self.attributes.eye_color.as_str().to_string(),
        }
    }

    // Getters
    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &Attribute {
        &self.attributes.name
    }

    pub fn height(&self) -> Magnitude {
        self.attributes.height
    }

    pub fn mass(&self) -> Magnitude {
        self.attributes.mass
    }

    pub fn hair_color(&self) -> &Attribute {
        &self.attributes.hair_color
    }

    pub fn skin_color(&self) -> &Attribute {
        &self.attributes.skin_color
    }

    pub fn eye_color(&self) -> &Attribute {
        &self.attributes.eye_color
    }

    pub fn birth_year(&self) -> Magnitude {
        self.attributes.birth_year
    }
}
