//! Admin CRUD for team members.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use clubsite_core::types::DbId;
use clubsite_db::models::team_member::TeamMemberInput;
use clubsite_db::repositories::{Repository, TeamMemberRepo};

use crate::error::AppResult;
use crate::handlers::admin::{self, err_flag, ok_flag};
use crate::middleware::admin::AdminSession;
use crate::state::AppState;
use crate::upload::{self, AdminForm, ImageSection, UploadError};
use crate::views::render;

pub async fn new_form(_admin: AdminSession, State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "admin/team_form.html", context! {})
}

fn input_from_form(
    form: &AdminForm,
    existing_image: Option<String>,
) -> Result<TeamMemberInput, String> {
    Ok(TeamMemberInput {
        name: form.require("name")?.to_string(),
        role: form.require("role")?.to_string(),
        category: form.require("category")?.to_string(),
        email: form.field("email").map(str::to_string),
        image_url: form.image_url.clone().or(existing_image),
    })
}

pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let form = match upload::read_admin_form(
        &mut multipart,
        ImageSection::Team,
        &state.config.upload_root,
    )
    .await
    {
        Ok(form) => form,
        Err(UploadError::Rejected(message)) => {
            let page = render(&state, "admin/team_form.html", context! { error => message })?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, "Team member create upload failed");
            return Ok(err_flag("team-member-add-failed"));
        }
    };

    let input = match input_from_form(&form, Some(ImageSection::Team.placeholder().to_string())) {
        Ok(input) => input,
        Err(message) => {
            // No row will reference a stored upload; remove it.
            upload::delete_stored_image(&state.config.upload_root, form.image_url.as_deref()).await;
            let page = render(
                &state,
                "admin/team_form.html",
                context! { error => message, values => form.values() },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match TeamMemberRepo::add(&state.pool, &input).await {
        Ok(member) => {
            tracing::info!(team_member_id = member.id, "Team member created");
            Ok(ok_flag("team-member-added"))
        }
        Err(err) => {
            tracing::error!(error = %err, "Team member create failed");
            Ok(err_flag("team-member-add-failed"))
        }
    }
}

pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match TeamMemberRepo::get_by_id(&state.pool, id).await? {
        Some(member) => {
            let page = render(&state, "admin/team_form.html", context! { member => member })?;
            Ok(page.into_response())
        }
        None => Ok(err_flag("team-member-not-found")),
    }
}

pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let Some(existing) = TeamMemberRepo::get_by_id(&state.pool, id).await? else {
        return Ok(err_flag("team-member-not-found"));
    };

    let form = match upload::read_admin_form(
        &mut multipart,
        ImageSection::Team,
        &state.config.upload_root,
    )
    .await
    {
        Ok(form) => form,
        Err(UploadError::Rejected(message)) => {
            let page = render(
                &state,
                "admin/team_form.html",
                context! { error => message, member => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, team_member_id = id, "Team member update upload failed");
            return Ok(err_flag("team-member-update-failed"));
        }
    };

    let replaced_image = form.image_url.is_some();
    let input = match input_from_form(&form, existing.image_url.clone()) {
        Ok(input) => input,
        Err(message) => {
            upload::delete_stored_image(&state.config.upload_root, form.image_url.as_deref()).await;
            let page = render(
                &state,
                "admin/team_form.html",
                context! { error => message, member => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match TeamMemberRepo::update(&state.pool, id, &input).await? {
        Some(_) => {
            if replaced_image {
                upload::delete_stored_image(&state.config.upload_root, existing.image_url.as_deref())
                    .await;
            }
            tracing::info!(team_member_id = id, "Team member updated");
            Ok(ok_flag("team-member-updated"))
        }
        None => Ok(err_flag("team-member-update-failed")),
    }
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    admin::delete_entity::<TeamMemberRepo, _>(&state, id, "team-member", |member| {
        member.image_url.clone()
    })
    .await
}
