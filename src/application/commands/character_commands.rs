//! Character Commands

use serde_json::Value;

use crate::domain::CharacterId;

/// 创建角色命令
///
/// 负载保持未类型化，由处理器统一校验并报告全部字段错误
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    pub payload: Value,
}

/// 删除角色命令
#[derive(Debug, Clone)]
pub struct DeleteCharacter {
    pub character_id: CharacterId,
}
