//! Integration tests for the admin content CRUD workflows.

mod common;

use axum::http::StatusCode;
use common::{
    body_string, get_auth, location, login, multipart_body, post_form_auth, post_multipart_auth,
};
use sqlx::SqlitePool;

use clubsite_db::repositories::{EventRepo, QuestionRepo, Repository};

const EVENT_FIELDS: &[(&str, &str)] = &[
    ("title", "Intro to Systems Programming"),
    ("date", "2031-03-14"),
    ("time", "18:00"),
    ("location", "Lab 2"),
    ("seats", "40"),
    ("description", "Pointers, processes, and pizza."),
];

// ---------------------------------------------------------------------------
// Events (multipart CRUD)
// ---------------------------------------------------------------------------

/// Creating an event without an upload assigns the placeholder image and
/// redirects with the success flag.
#[sqlx::test]
async fn event_create_without_upload_uses_placeholder(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(EVENT_FIELDS, None);
    let response = post_multipart_auth(app, "/admin/events", &cookie, body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?success=event-added");

    let events = EventRepo::get_all(&pool).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Intro to Systems Programming");
    assert_eq!(events[0].seats, 40);
    assert_eq!(events[0].image_url.as_deref(), Some("/images/defaults/event.png"));
}

/// Creating an event with a valid upload stores the file and references it.
#[sqlx::test]
async fn event_create_with_upload_stores_the_file(pool: SqlitePool) {
    let (app, upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(EVENT_FIELDS, Some(("poster.png", "image/png", b"png-bytes")));
    let response = post_multipart_auth(app, "/admin/events", &cookie, body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?success=event-added");

    let events = EventRepo::get_all(&pool).await.unwrap();
    let image_url = events[0].image_url.as_deref().unwrap();
    assert!(image_url.starts_with("/images/events/"));
    assert!(image_url.ends_with(".png"));

    let stored = upload_dir
        .path()
        .join(image_url.trim_start_matches("/images/"));
    assert!(stored.exists(), "uploaded file must be on disk");
}

/// An upload with a disallowed type re-renders the form and inserts nothing.
#[sqlx::test]
async fn event_create_rejects_disallowed_file_type(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(
        EVENT_FIELDS,
        Some(("malware.exe", "application/octet-stream", b"MZ")),
    );
    let response = post_multipart_auth(app, "/admin/events", &cookie, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(EventRepo::get_all(&pool).await.unwrap().is_empty());
}

/// A missing required field re-renders the form with an inline message.
#[sqlx::test]
async fn event_create_requires_all_fields(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(&[("title", "No date")], None);
    let response = post_multipart_auth(app, "/admin/events", &cookie, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_string(response).await;
    assert!(body.contains("Please fill in all required fields"));
    assert!(EventRepo::get_all(&pool).await.unwrap().is_empty());
}

/// A valid upload alongside a failing text field leaves no file behind.
#[sqlx::test]
async fn event_create_validation_failure_discards_the_upload(pool: SqlitePool) {
    let (app, upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(
        &[("title", "Image but no date")],
        Some(("poster.png", "image/png", b"png-bytes")),
    );
    let response = post_multipart_auth(app, "/admin/events", &cookie, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(EventRepo::get_all(&pool).await.unwrap().is_empty());

    let mut entries = tokio::fs::read_dir(upload_dir.path().join("events")).await.unwrap();
    assert!(
        entries.next_entry().await.unwrap().is_none(),
        "no orphaned file may remain in the upload directory"
    );
}

/// Editing a missing event redirects with the not-found flag.
#[sqlx::test]
async fn event_edit_missing_row_flags_not_found(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;
    let cookie = login(app.clone()).await;

    let response = get_auth(app, "/admin/events/999/edit", &cookie).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?error=event-not-found");
}

/// A full-field update replaces every submitted value and keeps the identity.
#[sqlx::test]
async fn event_update_replaces_all_fields(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(EVENT_FIELDS, None);
    post_multipart_auth(app.clone(), "/admin/events", &cookie, body).await;
    let id = EventRepo::get_all(&pool).await.unwrap()[0].id;

    let body = multipart_body(
        &[
            ("title", "Renamed Event"),
            ("date", "2031-04-01"),
            ("time", "19:30"),
            ("location", "Auditorium"),
            ("seats", "120"),
            ("description", "Bigger venue."),
        ],
        None,
    );
    let response =
        post_multipart_auth(app, &format!("/admin/events/{id}"), &cookie, body).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin?success=event-updated");

    let event = EventRepo::get_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(event.id, id);
    assert_eq!(event.title, "Renamed Event");
    assert_eq!(event.seats, 120);
    // No new upload: the previous image reference is kept.
    assert_eq!(event.image_url.as_deref(), Some("/images/defaults/event.png"));
}

/// Deleting an existing event removes the row and flags success; deleting it
/// again flags not-found without crashing.
#[sqlx::test]
async fn event_delete_is_flagged_and_tolerates_missing_rows(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(EVENT_FIELDS, None);
    post_multipart_auth(app.clone(), "/admin/events", &cookie, body).await;
    let id = EventRepo::get_all(&pool).await.unwrap()[0].id;

    let response =
        post_form_auth(app.clone(), &format!("/admin/events/{id}/delete"), &cookie, "").await;
    assert_eq!(location(&response), "/admin?success=event-deleted");
    assert!(EventRepo::get_all(&pool).await.unwrap().is_empty());

    let response =
        post_form_auth(app, &format!("/admin/events/{id}/delete"), &cookie, "").await;
    assert_eq!(location(&response), "/admin?error=event-not-found");
}

/// Deleting an event with an uploaded image also removes the file; the
/// placeholder is never touched.
#[sqlx::test]
async fn event_delete_removes_the_stored_image(pool: SqlitePool) {
    let (app, upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let body = multipart_body(EVENT_FIELDS, Some(("poster.jpg", "image/jpeg", b"jpg")));
    post_multipart_auth(app.clone(), "/admin/events", &cookie, body).await;

    let event = EventRepo::get_all(&pool).await.unwrap().remove(0);
    let stored = upload_dir
        .path()
        .join(event.image_url.as_deref().unwrap().trim_start_matches("/images/"));
    assert!(stored.exists());

    post_form_auth(app, &format!("/admin/events/{}/delete", event.id), &cookie, "").await;
    assert!(!stored.exists(), "stored image must be removed with the row");
}

// ---------------------------------------------------------------------------
// Questions (urlencoded CRUD)
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn question_crud_roundtrip(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let response = post_form_auth(
        app.clone(),
        "/admin/questions",
        &cookie,
        "category=Algorithms&subcategory=Graphs&title=Shortest+paths&link=https://example.com/q/1",
    )
    .await;
    assert_eq!(location(&response), "/admin?success=question-added");

    let id = QuestionRepo::get_all(&pool).await.unwrap()[0].id;

    let response = post_form_auth(
        app.clone(),
        &format!("/admin/questions/{id}"),
        &cookie,
        "category=Algorithms&subcategory=Trees&title=Lowest+common+ancestor&link=https://example.com/q/2",
    )
    .await;
    assert_eq!(location(&response), "/admin?success=question-updated");

    let question = QuestionRepo::get_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(question.subcategory, "Trees");

    let response = post_form_auth(
        app,
        &format!("/admin/questions/{id}/delete"),
        &cookie,
        "",
    )
    .await;
    assert_eq!(location(&response), "/admin?success=question-deleted");
    assert!(QuestionRepo::get_all(&pool).await.unwrap().is_empty());
}

/// A blank required question field is rejected before any insert.
#[sqlx::test]
async fn question_create_requires_all_fields(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool.clone()).await;
    let cookie = login(app.clone()).await;

    let response = post_form_auth(
        app,
        "/admin/questions",
        &cookie,
        "category=Algorithms&subcategory=&title=x&link=y",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(QuestionRepo::get_all(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// The dashboard renders the outcome banner carried in the redirect flag.
#[sqlx::test]
async fn dashboard_renders_outcome_flags(pool: SqlitePool) {
    let (app, _upload_dir) = common::build_test_app(pool).await;
    let cookie = login(app.clone()).await;

    let response = get_auth(app.clone(), "/admin?success=event-added", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("event-added"));

    let response = get_auth(app, "/admin?error=invalid-status", &cookie).await;
    assert!(body_string(response).await.contains("invalid-status"));
}
