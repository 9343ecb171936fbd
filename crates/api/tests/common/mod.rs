#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use filmoteca_api::config::ServerConfig;
use filmoteca_api::router::build_app_router;
use filmoteca_api::state::AppState;
use filmoteca_api::upload::ImageStore;

/// Boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "filmoteca-test-boundary";

/// Build a test `ServerConfig` with safe defaults and the given upload root.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.display().to_string(),
        max_upload_bytes: 1024 * 1024,
        json_logs: false,
    }
}

/// Build the full application router, writing uploads to a shared scratch
/// directory under the system temp dir.
pub fn build_test_app(pool: PgPool) -> Router {
    let dir = std::env::temp_dir().join("filmoteca-api-tests");
    build_test_app_with_uploads(pool, &dir)
}

/// Build the full application router with uploads written beneath `dir`.
///
/// Goes through `build_app_router` so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery, body limit)
/// that production uses.
pub fn build_test_app_with_uploads(pool: PgPool, dir: &Path) -> Router {
    let config = test_config(dir);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        images: Arc::new(ImageStore::new(dir)),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST with no body (restore, attach).
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, json).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, json).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&json).unwrap()))
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// An image part for [`post_multipart`]: file name, content type, bytes.
pub struct FilePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

/// Encode text fields and an optional `image` part as multipart/form-data.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<FilePart<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    image: Option<FilePart<'_>>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields, image)))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixtures (through the HTTP API)
// ---------------------------------------------------------------------------

/// Create a director via `POST /directores` and return its JSON row.
pub async fn create_director(app: Router, name: &str) -> serde_json::Value {
    let response = post_json(app, "/directores", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), 201, "director fixture should be created");
    body_json(response).await["data"].clone()
}

/// Create a film via `POST /peliculas` and return its JSON row.
pub async fn create_film(app: Router, title: &str, year: i32) -> serde_json::Value {
    let response = post_json(
        app,
        "/peliculas",
        serde_json::json!({ "title": title, "release_year": year }),
    )
    .await;
    assert_eq!(response.status(), 201, "film fixture should be created");
    body_json(response).await["data"].clone()
}

/// Create a character via `POST /personajes` and return its JSON row.
pub async fn create_character(app: Router, name: &str) -> serde_json::Value {
    let response = post_json(
        app,
        "/personajes",
        serde_json::json!({ "name": name, "power": "Flight" }),
    )
    .await;
    assert_eq!(response.status(), 201, "character fixture should be created");
    body_json(response).await["data"].clone()
}
