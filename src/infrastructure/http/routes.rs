//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                               GET     健康检查
//! - /character/getAll                   GET     列出所有角色
//! - /character/get/{character_id}       GET     获取角色详情
//! - /character/add                      POST    新增角色
//! - /character/delete/{character_id}    DELETE  删除角色

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/character", character_routes())
        .fallback(handlers::not_found)
}

/// Character 路由
fn character_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/getAll", get(handlers::list_characters))
        .route("/get/:character_id", get(handlers::get_character))
        .route("/add", post(handlers::create_character))
        .route("/delete/:character_id", delete(handlers::delete_character))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryCharacterRepository;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(Arc::new(InMemoryCharacterRepository::new()));
        create_routes().with_state(Arc::new(state))
    }

    async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let (status, text) = send_raw(app, request).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap()
        };
        (status, value)
    }

    fn obi_wan() -> Value {
        json!({
            "id": 10,
            "name": "Obi-Wan Kenobi",
            "height": 182,
            "mass": 77,
            "hair_color": "auburn, white",
            "skin_color": "fair",
            "eye_color": "blue-gray",
            "birth_year": 57
        })
    }

    #[tokio::test]
    async fn test_character_lifecycle() {
        let app = app();

        let (status, body) = send(&app, "POST", "/character/add", Some(obi_wan())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, obi_wan());

        let (status, body) = send(&app, "GET", "/character/get/10", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, obi_wan());

        let (status, body) = send(&app, "GET", "/character/getAll", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 10,
                "name": "Obi-Wan Kenobi",
                "height": 182,
                "mass": 77,
                "birth_year": 57,
                "eye_color": "blue-gray"
            }])
        );

        let (status, body) = send(&app, "DELETE", "/character/delete/10", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"info": "Character with id '10' was deleted"}));

        let (status, body) = send(&app, "GET", "/character/get/10", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Character not found"}));

        let (status, body) = send(&app, "GET", "/character/getAll", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_response_keys_are_sorted() {
        let app = app();
        send(&app, "POST", "/character/add", Some(obi_wan())).await;

        let request = Request::builder()
            .uri("/character/get/10")
            .body(Body::empty())
            .unwrap();
        let (_, text) = send_raw(&app, request).await;
        assert_eq!(
            text,
            r#"{"birth_year":57,"eye_color":"blue-gray","hair_color":"auburn, white","height":182,"id":10,"mass":77,"name":"Obi-Wan Kenobi","skin_color":"fair"}"#
        );
    }

    #[tokio::test]
    async fn test_add_duplicate_id() {
        let app = app();
        send(&app, "POST", "/character/add", Some(obi_wan())).await;

        let (status, body) = send(&app, "POST", "/character/add", Some(obi_wan())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Character with this ID already exists"}));
    }

    #[tokio::test]
    async fn test_add_reports_field_errors() {
        let app = app();
        let mut payload = obi_wan();
        payload["height"] = json!(-182);
        payload["hair_color"] = json!("");
        payload.as_object_mut().unwrap().remove("birth_year");

        let (status, body) = send(&app, "POST", "/character/add", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"errors": [
                {"field": "height", "message": "Input should be greater than 0"},
                {"field": "hair_color", "message": "Value error, Must not be empty"},
                {"field": "birth_year", "message": "Field required"}
            ]})
        );

        let (_, body) = send(&app, "GET", "/character/getAll", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_add_rejects_non_object_body() {
        let (status, body) = send(&app(), "POST", "/character/add", Some(json!([1]))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Request body must be a JSON object"}));
    }

    #[tokio::test]
    async fn test_add_malformed_json() {
        let request = Request::builder()
            .method("POST")
            .uri("/character/add")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{\"id\": 1,"))
            .unwrap();
        let (status, text) = send_raw(&app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&text).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_add_without_json_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/character/add")
            .body(Body::from(obi_wan().to_string()))
            .unwrap();
        let (status, text) = send_raw(&app(), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: Value = serde_json::from_str(&text).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_delete_unknown_character() {
        let (status, body) = send(&app(), "DELETE", "/character/delete/3", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Character not found"}));
    }

    #[tokio::test]
    async fn test_non_integer_path_is_not_found() {
        let app = app();
        for uri in ["/character/get/abc", "/character/get/-1", "/character/delete/1.5"] {
            let method = if uri.contains("delete") { "DELETE" } else { "GET" };
            let (status, body) = send(&app, method, uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, json!({"error": "Not Found"}));
        }
    }

    #[tokio::test]
    async fn test_unknown_route_and_wrong_method() {
        let app = app();

        let (status, body) = send(&app, "GET", "/characters", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not Found"}));

        let (status, _) = send(&app, "GET", "/character/add", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_ping_reports_count() {
        let app = app();
        send(&app, "POST", "/character/add", Some(obi_wan())).await;

        let (status, body) = send(&app, "GET", "/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["characters"], 1);
    }
}
