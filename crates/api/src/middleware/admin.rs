//! Admin route guard.
//!
//! Every `/admin/...` handler except the login pair takes [`AdminSession`]
//! as its first extractor argument, so the session check runs before any
//! body is read and before the handler performs any work. The guard is a
//! pure precondition: an unauthenticated request is answered with a redirect
//! to the login page and nothing else happens.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use crate::session;
use crate::state::AppState;

/// Proof that the request carries a live, authenticated admin session.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The session id, kept so logout can destroy the right session.
    pub session_id: String,
}

/// Rejection that sends the client to the login page.
pub struct LoginRedirect;

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        Redirect::to("/admin/login").into_response()
    }
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = LoginRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_id =
            session::session_id_from_headers(&parts.headers).ok_or(LoginRedirect)?;

        match state.sessions.get(&session_id).await {
            Some(session) if session.authenticated => Ok(AdminSession { session_id }),
            _ => Err(LoginRedirect),
        }
    }
}
