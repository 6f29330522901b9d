//! Admin CRUD for events.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use clubsite_core::types::DbId;
use clubsite_db::models::event::EventInput;
use clubsite_db::repositories::{EventRepo, Repository};

use crate::error::AppResult;
use crate::handlers::admin::{self, err_flag, ok_flag};
use crate::middleware::admin::AdminSession;
use crate::state::AppState;
use crate::upload::{self, AdminForm, ImageSection, UploadError};
use crate::views::render;

pub async fn new_form(_admin: AdminSession, State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "admin/event_form.html", context! {})
}

/// Build an [`EventInput`] from a submitted form, using `existing_image`
/// when the form carried no upload.
fn input_from_form(form: &AdminForm, existing_image: Option<String>) -> Result<EventInput, String> {
    let seats: i64 = form
        .require("seats")?
        .parse()
        .map_err(|_| "Seats must be a whole number".to_string())?;

    Ok(EventInput {
        title: form.require("title")?.to_string(),
        date: form.require("date")?.to_string(),
        time: form.require("time")?.to_string(),
        location: form.require("location")?.to_string(),
        seats,
        description: form.require("description")?.to_string(),
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
        ImageSection::Events,
        &state.config.upload_root,
    )
    .await
    {
        Ok(form) => form,
        Err(UploadError::Rejected(message)) => {
            let page = render(
                &state,
                "admin/event_form.html",
                context! { error => message },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, "Event create upload failed");
            return Ok(err_flag("event-add-failed"));
        }
    };

    let input = match input_from_form(&form, Some(ImageSection::Events.placeholder().to_string())) {
        Ok(input) => input,
        Err(message) => {
            // No row will reference a stored upload; remove it.
            upload::delete_stored_image(&state.config.upload_root, form.image_url.as_deref()).await;
            let page = render(
                &state,
                "admin/event_form.html",
                context! { error => message, values => form.values() },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match EventRepo::add(&state.pool, &input).await {
        Ok(event) => {
            tracing::info!(event_id = event.id, "Event created");
            Ok(ok_flag("event-added"))
        }
        Err(err) => {
            tracing::error!(error = %err, "Event create failed");
            Ok(err_flag("event-add-failed"))
        }
    }
}

pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match EventRepo::get_by_id(&state.pool, id).await? {
        Some(event) => {
            let page = render(&state, "admin/event_form.html", context! { event => event })?;
            Ok(page.into_response())
        }
        None => Ok(err_flag("event-not-found")),
    }
}

pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let Some(existing) = EventRepo::get_by_id(&state.pool, id).await? else {
        return Ok(err_flag("event-not-found"));
    };

    let form = match upload::read_admin_form(
        &mut multipart,
        ImageSection::Events,
        &state.config.upload_root,
    )
    .await
    {
        Ok(form) => form,
        Err(UploadError::Rejected(message)) => {
            let page = render(
                &state,
                "admin/event_form.html",
                context! { error => message, event => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, event_id = id, "Event update upload failed");
            return Ok(err_flag("event-update-failed"));
        }
    };

    let replaced_image = form.image_url.is_some();
    let input = match input_from_form(&form, existing.image_url.clone()) {
        Ok(input) => input,
        Err(message) => {
            upload::delete_stored_image(&state.config.upload_root, form.image_url.as_deref()).await;
            let page = render(
                &state,
                "admin/event_form.html",
                context! { error => message, event => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match EventRepo::update(&state.pool, id, &input).await? {
        Some(_) => {
            if replaced_image {
                upload::delete_stored_image(&state.config.upload_root, existing.image_url.as_deref())
                    .await;
            }
            tracing::info!(event_id = id, "Event updated");
            Ok(ok_flag("event-updated"))
        }
        None => Ok(err_flag("event-update-failed")),
    }
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    admin::delete_entity::<EventRepo, _>(&state, id, "event", |event| event.image_url.clone()).await
}
