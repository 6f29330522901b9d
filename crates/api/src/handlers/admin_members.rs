//! Admin review actions for membership applications.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use clubsite_core::membership;
use clubsite_core::types::DbId;
use clubsite_db::repositories::MemberRepo;

use crate::error::AppResult;
use crate::handlers::admin::{err_flag, ok_flag};
use crate::middleware::admin::AdminSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusSubmission {
    #[serde(default)]
    pub status: String,
}

/// Set an application's review status.
///
/// The submitted value must be one of the recognized statuses; anything
/// else is rejected before any write happens.
pub async fn update_status(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(submission): Form<StatusSubmission>,
) -> AppResult<Response> {
    let status = submission.status.trim();
    if membership::validate_status(status).is_err() {
        tracing::warn!(member_id = id, status, "Rejected unrecognized status value");
        return Ok(err_flag("invalid-status"));
    }

    if MemberRepo::update_status(&state.pool, id, status).await? {
        tracing::info!(member_id = id, status, "Application status updated");
        Ok(ok_flag("status-updated"))
    } else {
        Ok(err_flag("status-update-failed"))
    }
}

/// Remove a membership application outright.
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    if MemberRepo::delete(&state.pool, id).await? {
        tracing::info!(member_id = id, "Application deleted");
        Ok(ok_flag("application-deleted"))
    } else {
        Ok(err_flag("application-delete-failed"))
    }
}
