#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use herhealth_api::auth::jwt::JwtConfig;
use herhealth_api::config::ServerConfig;
use herhealth_api::router::build_app_router;
use herhealth_api::state::AppState;
use herhealth_core::store::MemoryUserStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is never dialled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Returns the store too so tests can inspect what the handlers wrote.
pub fn build_test_app() -> (Router, Arc<MemoryUserStore>) {
    let config = test_config();
    let store = Arc::new(MemoryUserStore::new());

    let state = AppState {
        store: store.clone(),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), store)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register a user through the API. Panics unless the response is 201.
pub async fn register(app: &Router, email: &str, password: &str) {
    let body = json!({
        "name": "Meera",
        "age": 29,
        "email": email,
        "password": password,
    });
    let response = post_json(app.clone(), "/api/register", body).await;
    assert_eq!(response.status(), 201, "registration of {email} failed");
}

/// Log in through the API and return the access token.
pub async fn login_token(app: &Router, email: &str, password: &str) -> String {
    let body = json!({ "email": email, "password": password });
    let response = post_json(app.clone(), "/api/login", body).await;
    assert_eq!(response.status(), 200, "login of {email} failed");
    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}
