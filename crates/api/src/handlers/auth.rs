//! Admin login and logout.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use minijinja::context;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::admin::AdminSession;
use crate::session::{self, Session};
use crate::state::AppState;
use crate::views::render;

pub async fn login_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "admin/login.html", context! {})
}

#[derive(Debug, Deserialize)]
pub struct LoginSubmission {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Check the submitted credentials against the configured admin pair.
///
/// On success the session is persisted before the redirect is issued, so the
/// request that follows the redirect always sees an authenticated session.
/// On failure the login page is re-rendered with one generic message that
/// does not reveal which of the two values was wrong.
pub async fn login(
    State(state): State<AppState>,
    Form(submission): Form<LoginSubmission>,
) -> AppResult<Response> {
    if !state
        .config
        .admin
        .matches(&submission.username, &submission.password)
    {
        tracing::warn!("Failed admin login attempt");
        let page = render(
            &state,
            "admin/login.html",
            context! { error => "Invalid credentials" },
        )?;
        return Ok((StatusCode::UNAUTHORIZED, page).into_response());
    }

    let session_id = session::new_session_id();
    state
        .sessions
        .set(&session_id, Session { authenticated: true })
        .await;
    tracing::info!("Admin logged in");

    Ok((
        [(SET_COOKIE, session::session_cookie(&session_id))],
        Redirect::to("/admin"),
    )
        .into_response())
}

/// Destroy the current session and clear the cookie.
pub async fn logout(admin: AdminSession, State(state): State<AppState>) -> Response {
    state.sessions.destroy(&admin.session_id).await;
    tracing::info!("Admin logged out");

    (
        [(SET_COOKIE, session::clear_session_cookie())],
        Redirect::to("/admin/login"),
    )
        .into_response()
}
