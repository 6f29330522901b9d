//! Admin CRUD for partners.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;

use clubsite_core::types::DbId;
use clubsite_db::models::partner::PartnerInput;
use clubsite_db::repositories::{PartnerRepo, Repository};

use crate::error::AppResult;
use crate::handlers::admin::{self, err_flag, ok_flag};
use crate::middleware::admin::AdminSession;
use crate::state::AppState;
use crate::upload::{self, AdminForm, ImageSection, UploadError};
use crate::views::render;

pub async fn new_form(_admin: AdminSession, State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "admin/partner_form.html", context! {})
}

fn input_from_form(form: &AdminForm, existing_logo: Option<String>) -> Result<PartnerInput, String> {
    Ok(PartnerInput {
        name: form.require("name")?.to_string(),
        description: form.require("description")?.to_string(),
        benefits: form.require("benefits")?.to_string(),
        logo_url: form.image_url.clone().or(existing_logo),
        website_url: form.field("website_url").map(str::to_string),
    })
}

pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let form = match upload::read_admin_form(
        &mut multipart,
        ImageSection::Partners,
        &state.config.upload_root,
    )
    .await
    {
        Ok(form) => form,
        Err(UploadError::Rejected(message)) => {
            let page = render(
                &state,
                "admin/partner_form.html",
                context! { error => message },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, "Partner create upload failed");
            return Ok(err_flag("partner-add-failed"));
        }
    };

    let input = match input_from_form(&form, Some(ImageSection::Partners.placeholder().to_string()))
    {
        Ok(input) => input,
        Err(message) => {
            // No row will reference a stored upload; remove it.
            upload::delete_stored_image(&state.config.upload_root, form.image_url.as_deref()).await;
            let page = render(
                &state,
                "admin/partner_form.html",
                context! { error => message, values => form.values() },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match PartnerRepo::add(&state.pool, &input).await {
        Ok(partner) => {
            tracing::info!(partner_id = partner.id, "Partner created");
            Ok(ok_flag("partner-added"))
        }
        Err(err) => {
            tracing::error!(error = %err, "Partner create failed");
            Ok(err_flag("partner-add-failed"))
        }
    }
}

pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match PartnerRepo::get_by_id(&state.pool, id).await? {
        Some(partner) => {
            let page = render(
                &state,
                "admin/partner_form.html",
                context! { partner => partner },
            )?;
            Ok(page.into_response())
        }
        None => Ok(err_flag("partner-not-found")),
    }
}

pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Response> {
    let Some(existing) = PartnerRepo::get_by_id(&state.pool, id).await? else {
        return Ok(err_flag("partner-not-found"));
    };

    let form = match upload::read_admin_form(
        &mut multipart,
        ImageSection::Partners,
        &state.config.upload_root,
    )
    .await
    {
        Ok(form) => form,
        Err(UploadError::Rejected(message)) => {
            let page = render(
                &state,
                "admin/partner_form.html",
                context! { error => message, partner => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
        Err(err) => {
            tracing::error!(error = %err, partner_id = id, "Partner update upload failed");
            return Ok(err_flag("partner-update-failed"));
        }
    };

    let replaced_logo = form.image_url.is_some();
    let input = match input_from_form(&form, existing.logo_url.clone()) {
        Ok(input) => input,
        Err(message) => {
            upload::delete_stored_image(&state.config.upload_root, form.image_url.as_deref()).await;
            let page = render(
                &state,
                "admin/partner_form.html",
                context! { error => message, partner => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match PartnerRepo::update(&state.pool, id, &input).await? {
        Some(_) => {
            if replaced_logo {
                upload::delete_stored_image(&state.config.upload_root, existing.logo_url.as_deref())
                    .await;
            }
            tracing::info!(partner_id = id, "Partner updated");
            Ok(ok_flag("partner-updated"))
        }
        None => Ok(err_flag("partner-update-failed")),
    }
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    admin::delete_entity::<PartnerRepo, _>(&state, id, "partner", |partner| {
        partner.logo_url.clone()
    })
    .await
}
