//! Admin CRUD for the question bank.
//!
//! Questions carry no image, so these forms are plain urlencoded posts
//! rather than multipart.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use minijinja::context;
use serde::{Deserialize, Serialize};

use clubsite_core::types::DbId;
use clubsite_db::models::question::QuestionInput;
use clubsite_db::repositories::{QuestionRepo, Repository};

use crate::error::AppResult;
use crate::handlers::admin::{self, err_flag, ok_flag};
use crate::middleware::admin::AdminSession;
use crate::state::AppState;
use crate::views::render;

pub async fn new_form(_admin: AdminSession, State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "admin/question_form.html", context! {})
}

#[derive(Debug, Deserialize, Serialize)]
pub struct QuestionSubmission {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}

impl QuestionSubmission {
    fn validate(&self) -> Result<QuestionInput, String> {
        let require = |value: &str| -> Result<String, String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err("Please fill in all required fields".to_string())
            } else {
                Ok(trimmed.to_string())
            }
        };

        Ok(QuestionInput {
            category: require(&self.category)?,
            subcategory: require(&self.subcategory)?,
            title: require(&self.title)?,
            link: require(&self.link)?,
        })
    }
}

pub async fn create(
    _admin: AdminSession,
    State(state): State<AppState>,
    Form(submission): Form<QuestionSubmission>,
) -> AppResult<Response> {
    let input = match submission.validate() {
        Ok(input) => input,
        Err(message) => {
            let page = render(
                &state,
                "admin/question_form.html",
                context! { error => message, values => submission },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match QuestionRepo::add(&state.pool, &input).await {
        Ok(question) => {
            tracing::info!(question_id = question.id, "Question created");
            Ok(ok_flag("question-added"))
        }
        Err(err) => {
            tracing::error!(error = %err, "Question create failed");
            Ok(err_flag("question-add-failed"))
        }
    }
}

pub async fn edit_form(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match QuestionRepo::get_by_id(&state.pool, id).await? {
        Some(question) => {
            let page = render(
                &state,
                "admin/question_form.html",
                context! { question => question },
            )?;
            Ok(page.into_response())
        }
        None => Ok(err_flag("question-not-found")),
    }
}

pub async fn update(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(submission): Form<QuestionSubmission>,
) -> AppResult<Response> {
    let input = match submission.validate() {
        Ok(input) => input,
        Err(message) => {
            let existing = QuestionRepo::get_by_id(&state.pool, id).await?;
            let page = render(
                &state,
                "admin/question_form.html",
                context! { error => message, question => existing },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match QuestionRepo::update(&state.pool, id, &input).await? {
        Some(_) => {
            tracing::info!(question_id = id, "Question updated");
            Ok(ok_flag("question-updated"))
        }
        None => Ok(err_flag("question-not-found")),
    }
}

pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    admin::delete_entity::<QuestionRepo, _>(&state, id, "question", |_| None).await
}
