pub mod roles;
pub mod users;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::admin::{admin_page, health_check};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(users::routes())
        .merge(roles::routes())
}

/// Assemble the whole application: the JSON API under /api, the admin page
/// at /, and a health probe.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", create_router())
        .route("/", get(admin_page))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use crate::config::DbConfig;
    use crate::database;

    // A pool that never connects; requests that fail validation or routing
    // come back before any connection is attempted.
    fn test_app() -> Router {
        let pool = PgPoolOptions::new().connect_lazy_with(database::connect_options(&DbConfig::default()));
        app(AppState::new(pool))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_message(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["error"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn post_user_with_short_password_is_rejected() {
        let request = json_request(
            Method::POST,
            "/api/users",
            json!({"username": "alice", "password": "pw", "email": "alice@example.com", "role": 1}),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("password"));
    }

    #[tokio::test]
    async fn post_user_without_email_is_rejected() {
        let request = json_request(
            Method::POST,
            "/api/users",
            json!({"username": "alice", "password": "secret1", "role": 1}),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("email"));
    }

    #[tokio::test]
    async fn post_user_with_non_integer_role_is_rejected() {
        let request = json_request(
            Method::POST,
            "/api/users",
            json!({"username": "alice", "password": "secret1", "email": "alice@example.com", "role": "admin"}),
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("role"));
    }

    #[tokio::test]
    async fn post_role_with_short_name_is_rejected() {
        let request = json_request(Method::POST, "/api/roles", json!({"name": "a"}));
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("name"));
    }

    #[tokio::test]
    async fn put_role_with_invalid_name_is_rejected_before_lookup() {
        let request = json_request(Method::PUT, "/api/roles/1", json!({"name": ""}));
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("name"));
    }

    #[tokio::test]
    async fn unsupported_method_yields_405_with_empty_body() {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/api/users")
            .body(Body::empty())
            .unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn admin_page_is_served_at_root() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn health_check_responds() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // Full CRUD flow against a real database; run with
    //   cargo test -- --ignored
    // once the schema from schema.sql is loaded.
    #[tokio::test]
    #[ignore = "requires a running Postgres with schema.sql applied"]
    async fn user_crud_round_trip() {
        let cfg = DbConfig::from_env();
        let pool = database::create_pool(&cfg).await.unwrap();
        let app = app(AppState::new(pool));

        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/roles", json!({"name": "testers"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let role: Value = serde_json::from_slice(&bytes).unwrap();
        let role_id = role["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/users",
                json!({"username": "crudtest", "password": "secret1", "email": "crud@example.com", "role": role_id}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let user: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(user["username"], "crudtest");
        assert!(user.get("password").is_none());
        assert!(user.get("password_hash").is_none());
        let user_id = user["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/users/{user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/roles/{role_id}"),
                json!({"name": "renamed"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let updated: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(updated["name"], "renamed");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/users/{user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Removal is observable: the same id now 404s.
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/users/{user_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/roles/{role_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
