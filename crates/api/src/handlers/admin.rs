//! Admin dashboard and the outcome-flag plumbing shared by every admin
//! mutation.
//!
//! Mutations never render their own result pages. Each one redirects back to
//! the dashboard with a `success` or `error` query flag, and the dashboard
//! turns the flag into a banner. That keeps every mutation endpoint
//! idempotent to refresh and the dashboard the single place admin state is
//! displayed.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use serde::Deserialize;

use clubsite_db::repositories::{
    EventRepo, MemberRepo, PartnerRepo, QuestionRepo, Repository, TeamMemberRepo,
};

use crate::error::AppResult;
use crate::middleware::admin::AdminSession;
use crate::state::AppState;
use crate::upload;
use crate::views::render;

/// Redirect to the dashboard with a success flag, e.g. `event-added`.
pub fn ok_flag(flag: &str) -> Response {
    Redirect::to(&format!("/admin?success={flag}")).into_response()
}

/// Redirect to the dashboard with an error flag, e.g. `event-add-failed`.
pub fn err_flag(flag: &str) -> Response {
    Redirect::to(&format!("/admin?error={flag}")).into_response()
}

#[derive(Debug, Deserialize)]
pub struct DashboardParams {
    pub success: Option<String>,
    pub error: Option<String>,
}

/// The admin dashboard: every entity list plus pending applications, with
/// the outcome banner from the previous mutation when one is flagged.
pub async fn dashboard(
    _admin: AdminSession,
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> AppResult<Html<String>> {
    let events = EventRepo::get_all(&state.pool).await?;
    let team = TeamMemberRepo::get_all(&state.pool).await?;
    let partners = PartnerRepo::get_all(&state.pool).await?;
    let questions = QuestionRepo::get_all(&state.pool).await?;
    let members = MemberRepo::list_recent(&state.pool).await?;

    render(
        &state,
        "admin/dashboard.html",
        context! {
            events => events,
            team => team,
            partners => partners,
            questions => questions,
            members => members,
            success => params.success,
            error => params.error,
        },
    )
}

/// Delete one content row and, when it owned a managed image, the image file.
///
/// The row is looked up first so the image reference survives the delete;
/// a missing row reports the entity's not-found flag rather than an error
/// page. Shared by the event, team, and partner delete handlers.
pub async fn delete_entity<R, F>(
    state: &AppState,
    id: clubsite_core::types::DbId,
    entity_flag: &str,
    image_of: F,
) -> AppResult<Response>
where
    R: Repository,
    F: FnOnce(&R::Row) -> Option<String>,
{
    let Some(row) = R::get_by_id(&state.pool, id).await? else {
        return Ok(err_flag(&format!("{entity_flag}-not-found")));
    };
    let image_url = image_of(&row);

    if R::delete(&state.pool, id).await? {
        upload::delete_stored_image(&state.config.upload_root, image_url.as_deref()).await;
        tracing::info!(entity = R::ENTITY, id, "Deleted");
        Ok(ok_flag(&format!("{entity_flag}-deleted")))
    } else {
        Ok(err_flag(&format!("{entity_flag}-delete-failed")))
    }
}
