#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use kanbee_api::config::{LogFormat, ServerConfig};
use kanbee_api::router::build_app_router;
use kanbee_api::state::AppState;
use kanbee_db::DbPool;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Fresh in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = kanbee_db::create_pool("sqlite::memory:", 1).await.unwrap();
    kanbee_db::run_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application router (same middleware stack as production).
pub fn build_test_app(pool: DbPool) -> Router {
    build_test_app_with_shutdown(pool, CancellationToken::new())
}

/// Build the router around a caller-controlled shutdown token.
pub fn build_test_app_with_shutdown(pool: DbPool, shutdown: CancellationToken) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        shutdown,
    };
    build_app_router(state).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a project through the API and return its id.
pub async fn create_project(app: &Router, name: &str, description: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/projects",
        serde_json::json!({"name": name, "description": description}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["project"]["id"].as_i64().unwrap()
}

/// Create a task through the API and return its id.
pub async fn create_task(app: &Router, project_id: i64, title: &str, state: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/tasks",
        serde_json::json!({
            "title": title,
            "description": "",
            "projectId": project_id,
            "state": state,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["task"]["id"].as_i64().unwrap()
}
