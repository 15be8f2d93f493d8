//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{ErrorResponse, FieldErrorsResponse};
use crate::application::ApplicationError;
use crate::domain::FieldError;

/// API 错误
///
/// 找不到角色和 id 冲突都返回 400，与既有客户端保持一致
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InvalidFields(Vec<FieldError>),
    UnsupportedMediaType(String),
    PayloadTooLarge(String),
    RouteNotFound,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::InvalidFields(errors) => {
                tracing::warn!(
                    fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
                    "Validation failed"
                );
                (StatusCode::BAD_REQUEST, Json(FieldErrorsResponse { errors })).into_response()
            }
            ApiError::UnsupportedMediaType(msg) => {
                tracing::warn!(error = %msg, "Unsupported media type");
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    Json(ErrorResponse::new(msg)),
                )
                    .into_response()
            }
            ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(error = %msg, "Payload too large");
                (StatusCode::PAYLOAD_TOO_LARGE, Json(ErrorResponse::new(msg))).into_response()
            }
            ApiError::RouteNotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found"))).into_response()
            }
            ApiError::Internal(msg) => {
                // 细节只写日志，不回给客户端
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } | ApplicationError::AlreadyExists { .. } => {
                ApiError::BadRequest(e.to_string())
            }
            ApplicationError::InvalidFields(errors) => ApiError::InvalidFields(errors.into_inner()),
            ApplicationError::InvalidPayload(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<crate::application::RepositoryError> for ApiError {
    fn from(e: crate::application::RepositoryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CharacterId;

    #[test]
    fn test_application_errors_map_to_bad_request() {
        let err = ApiError::from(ApplicationError::not_found("Character", CharacterId::new(1)));
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Character not found"));

        let err = ApiError::from(ApplicationError::already_exists(
            "Character",
            CharacterId::new(1),
        ));
        assert!(
            matches!(err, ApiError::BadRequest(ref m) if m == "Character with this ID already exists")
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::RouteNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("disk full".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::UnsupportedMediaType("no json".into())
                .into_response()
                .status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }
}
