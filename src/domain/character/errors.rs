//! Character Context - Errors

use serde::Serialize;
use thiserror::Error;

/// 单个字段的校验失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 一次校验收集到的全部字段错误（按字段声明顺序）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid character payload: {} field error(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}
