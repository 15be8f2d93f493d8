//! Character HTTP Handlers

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequestParts, Path, State},
    http::{request::Parts, StatusCode},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{CreateCharacter, DeleteCharacter, GetCharacter, ListCharacters};
use crate::domain::CharacterId;
use crate::infrastructure::http::dto::{CharacterResponse, CharacterSummaryResponse, InfoResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// Extractors
// ============================================================================

/// 路径中的角色 id
///
/// 只匹配非负十进制整数，其余一律视为路由不存在（404）
#[derive(Debug, Clone, Copy)]
pub struct CharacterIdParam(pub CharacterId);

#[async_trait]
impl<S> FromRequestParts<S> for CharacterIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::RouteNotFound)?;

        parse_character_id(&raw)
            .map(Self)
            .ok_or(ApiError::RouteNotFound)
    }
}

fn parse_character_id(raw: &str) -> Option<CharacterId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i64>().ok().map(CharacterId::new)
}

fn json_body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            Err(ApiError::UnsupportedMediaType(rejection.body_text()))
        }
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(ApiError::PayloadTooLarge(rejection.body_text()))
        }
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// 获取所有角色（列表视图）
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CharacterSummaryResponse>>, ApiError> {
    let summaries = state.list_characters_handler.handle(ListCharacters).await?;

    Ok(Json(
        summaries
            .into_iter()
            .map(CharacterSummaryResponse::from)
            .collect(),
    ))
}

/// 获取角色详情
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    CharacterIdParam(character_id): CharacterIdParam,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = state
        .get_character_handler
        .handle(GetCharacter { character_id })
        .await?;

    Ok(Json(CharacterResponse::from(&character)))
}

/// 新增角色
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CharacterResponse>), ApiError> {
    let payload = json_body(payload)?;

    let character = state
        .create_character_handler
        .handle(CreateCharacter { payload })
        .await?;

    Ok((StatusCode::CREATED, Json(CharacterResponse::from(&character))))
}

/// 删除角色
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    CharacterIdParam(character_id): CharacterIdParam,
) -> Result<Json<InfoResponse>, ApiError> {
    let deleted = state
        .delete_character_handler
        .handle(DeleteCharacter { character_id })
        .await?;

    Ok(Json(InfoResponse::deleted(deleted)))
}

/// 未匹配任何路由
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character_id() {
        assert_eq!(parse_character_id("42"), Some(CharacterId::new(42)));
        assert_eq!(parse_character_id("007"), Some(CharacterId::new(7)));
        assert_eq!(parse_character_id("-1"), None);
        assert_eq!(parse_character_id("+1"), None);
        assert_eq!(parse_character_id("abc"), None);
        assert_eq!(parse_character_id(""), None);
        assert_eq!(parse_character_id("99999999999999999999"), None);
    }
}
