//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use clubsite_api::config::{AdminConfig, ServerConfig};
use clubsite_api::router::build_app_router;
use clubsite_api::session::MemorySessionStore;
use clubsite_api::state::AppState;
use clubsite_api::views;

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-pw";

/// Build a test `ServerConfig` with safe defaults and the given upload root.
pub fn test_config(upload_root: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        request_timeout_secs: 30,
        upload_root,
        session_idle_secs: 1800,
        admin: AdminConfig {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
    }
}

/// Build the full application router against the given pool, with the schema
/// initialized and uploads pointed at a fresh temp directory.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same route tree and middleware stack that production uses.
/// The returned `TempDir` must be kept alive for the duration of the test.
pub async fn build_test_app(pool: SqlitePool) -> (Router, TempDir) {
    clubsite_db::init_schema(&pool)
        .await
        .expect("schema init should succeed");

    let upload_dir = tempfile::tempdir().expect("temp dir should be creatable");
    let config = test_config(upload_dir.path().to_path_buf());

    let state = AppState {
        pool,
        config: Arc::new(config),
        sessions: Arc::new(MemorySessionStore::new(Duration::from_secs(1800))),
        views: Arc::new(views::build_env()),
    };

    (build_app_router(state), upload_dir)
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, path: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a urlencoded form body.
pub async fn post_form(app: Router, path: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a urlencoded form body with a session cookie.
pub async fn post_form_auth(app: Router, path: &str, cookie: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a multipart/form-data body from text fields plus an optional
/// `image` file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
                 {value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\n\
                 Content-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart body with a session cookie.
pub async fn post_multipart_auth(
    app: Router,
    path: &str,
    cookie: &str,
    body: Vec<u8>,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .header(COOKIE, cookie)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Log in with the test credentials and return the session cookie pair
/// (`club_session=<id>`) for subsequent requests.
pub async fn login(app: Router) -> String {
    let body = format!(
        "username={TEST_ADMIN_USERNAME}&password={TEST_ADMIN_PASSWORD}"
    );
    let response = post_form(app, "/admin/login", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set a session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("cookie must have a name=value part")
        .to_string()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get("location")
        .expect("response must carry a Location header")
        .to_str()
        .unwrap()
}
