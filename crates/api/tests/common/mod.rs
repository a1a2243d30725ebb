#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use qa_api::config::{ServerConfig, StorageConfig};
use qa_api::router::build_app_router;
use qa_api::state::AppState;
use qa_db::repositories::QuestionRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin, a 30-second request
/// timeout, and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig::Memory,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Goes through the same `build_app_router` as `main.rs`, so tests exercise
/// the production middleware stack. Clone the returned router to send
/// several requests against the same store.
pub fn build_test_app() -> Router {
    build_test_app_with(QuestionRepo::in_memory(), &test_config())
}

/// Build the full application router over `questions` with `config`.
pub fn build_test_app_with(questions: QuestionRepo, config: &ServerConfig) -> Router {
    build_app_router(AppState { questions }, config)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri)).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response {
    send(app, empty_request(Method::POST, uri)).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, body)).await
}

pub async fn put_empty(app: &Router, uri: &str) -> Response {
    send(app, empty_request(Method::PUT, uri)).await
}

pub async fn put_raw(app: &Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri)).await
}

pub async fn post_raw(app: &Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Let the clock move so consecutive writes get distinct timestamps.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
}
