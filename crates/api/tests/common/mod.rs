#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use teamform_api::config::{AssignmentConfig, ServerConfig};
use teamform_api::router::build_app_router;
use teamform_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and a fixed shuffle seed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        assignment: AssignmentConfig {
            rng_seed: Some(7),
            ..AssignmentConfig::default()
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), false).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(body.to_string()), true).await
}

/// POST with no body and no content type.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, Body::empty(), false).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), false).await
}

async fn send(app: Router, method: Method, uri: &str, body: Body, json: bool) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if json {
        request = request.header("content-type", "application/json");
    }
    app.oneshot(request.body(body).unwrap()).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
