//! Integration tests for admin login, logout, and the session guard.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{get, get_auth, location, login, post_form, post_form_auth};
use sqlx::SqlitePool;

use clubsite_db::repositories::{EventRepo, Repository};

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Correct credentials redirect to the dashboard with a session cookie, and
/// the session is usable on the very next request.
#[sqlx::test]
async fn login_success_sets_usable_session(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;

    let cookie = login(app.clone()).await;
    assert!(cookie.starts_with("club_session="));

    let response = get_auth(app, "/admin", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Wrong credentials re-render the login page with a generic message and no
/// session cookie.
#[sqlx::test]
async fn login_failure_is_generic(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;

    let response = post_form(
        app,
        "/admin/login",
        "username=admin&password=not-the-password",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(SET_COOKIE).is_none());

    let body = common::body_string(response).await;
    assert!(body.contains("Invalid credentials"));
    // The message must not say which field was wrong.
    assert!(!body.contains("password was"));
}

/// Submitted credentials are trimmed before comparison.
#[sqlx::test]
async fn login_trims_submitted_values(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;

    let body = format!(
        "username=%20{}%20&password={}%20",
        common::TEST_ADMIN_USERNAME,
        common::TEST_ADMIN_PASSWORD
    );
    let response = post_form(app, "/admin/login", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");
}

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

/// Unauthenticated requests to guarded routes redirect to the login page.
#[sqlx::test]
async fn guard_redirects_unauthenticated_requests(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;

    for path in ["/admin", "/admin/events/new", "/admin/events/1/edit"] {
        let response = get(app.clone(), path).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(location(&response), "/admin/login");
    }
}

/// An unauthenticated mutation is blocked before any store change.
#[sqlx::test]
async fn guard_blocks_mutations_without_side_effects(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;

    let response = post_form(app, "/admin/events/1/delete", "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    // Nothing was touched; the table is still empty and healthy.
    let events = EventRepo::get_all(&pool).await.unwrap();
    assert!(events.is_empty());
}

/// A made-up session cookie does not pass the guard.
#[sqlx::test]
async fn guard_rejects_unknown_session_ids(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;

    let response = get_auth(app, "/admin", "club_session=forged-session-id").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout destroys the session server-side; the old cookie is useless
/// afterwards.
#[sqlx::test]
async fn logout_invalidates_the_session(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;
    let cookie = login(app.clone()).await;

    let response = post_form_auth(app.clone(), "/admin/logout", &cookie, "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");

    // Stale cookie no longer resolves to a session.
    let response = get_auth(app, "/admin", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin/login");
}
