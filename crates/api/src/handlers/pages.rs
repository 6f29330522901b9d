//! Public server-rendered pages.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use minijinja::context;
use serde::{Deserialize, Serialize};

use clubsite_db::models::member::MemberApplication;
use clubsite_db::models::question::Question;
use clubsite_db::models::team_member::TeamMember;
use clubsite_db::repositories::{
    EventRepo, MemberAddError, MemberRepo, PartnerRepo, QuestionRepo, Repository, TeamMemberRepo,
};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::render;

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let upcoming = EventRepo::get_upcoming(&state.pool).await?;
    let partners = PartnerRepo::get_all(&state.pool).await?;
    render(
        &state,
        "index.html",
        context! { upcoming_events => upcoming, partners => partners },
    )
}

/// Events page, split into upcoming and past around today's date.
pub async fn events(State(state): State<AppState>) -> AppResult<Html<String>> {
    let all = EventRepo::get_all(&state.pool).await?;
    let today = chrono::Utc::now().date_naive().to_string();

    let (mut upcoming, past): (Vec<_>, Vec<_>) =
        all.into_iter().partition(|event| event.date >= today);
    // get_all returns newest first; upcoming reads better soonest first.
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));

    render(
        &state,
        "events.html",
        context! { upcoming => upcoming, past => past },
    )
}

/// Team page, grouped by category in alphabetical category order.
pub async fn team(State(state): State<AppState>) -> AppResult<Html<String>> {
    let members = TeamMemberRepo::get_all(&state.pool).await?;

    let mut groups: BTreeMap<String, Vec<TeamMember>> = BTreeMap::new();
    for member in members {
        groups.entry(member.category.clone()).or_default().push(member);
    }

    render(&state, "team.html", context! { groups => groups })
}

pub async fn partners(State(state): State<AppState>) -> AppResult<Html<String>> {
    let partners = PartnerRepo::get_all(&state.pool).await?;
    render(&state, "partners.html", context! { partners => partners })
}

/// Question bank page, grouped category -> subcategory.
pub async fn questions(State(state): State<AppState>) -> AppResult<Html<String>> {
    let questions = QuestionRepo::get_all(&state.pool).await?;

    let mut groups: BTreeMap<String, BTreeMap<String, Vec<Question>>> = BTreeMap::new();
    for question in questions {
        groups
            .entry(question.category.clone())
            .or_default()
            .entry(question.subcategory.clone())
            .or_default()
            .push(question);
    }

    render(&state, "questions.html", context! { groups => groups })
}

pub async fn join_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "join.html", context! {})
}

/// Membership application form fields, as submitted by the browser.
/// Serialized back into the template when re-rendering after a failure.
#[derive(Debug, Deserialize, Serialize)]
pub struct JoinSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub interests: String,
}

impl JoinSubmission {
    /// Trimmed required fields, or the first missing one.
    fn validate(&self) -> Result<MemberApplication, String> {
        let require = |value: &str| -> Result<String, String> {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Err("Please fill in all required fields".to_string())
            } else {
                Ok(trimmed.to_string())
            }
        };

        let optional = |value: &str| -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let email = require(&self.email)?;
        if !email.contains('@') {
            return Err("Please enter a valid email address".to_string());
        }

        Ok(MemberApplication {
            name: require(&self.name)?,
            email,
            student_id: require(&self.student_id)?,
            department: require(&self.department)?,
            semester: require(&self.semester)?,
            phone: optional(&self.phone),
            interests: optional(&self.interests),
        })
    }
}

/// Submit a membership application.
///
/// Validation failures and duplicate emails re-render the form with an
/// inline message and the submitted values preserved; a successful submit
/// renders the confirmation variant of the same page.
pub async fn join_submit(
    State(state): State<AppState>,
    Form(submission): Form<JoinSubmission>,
) -> AppResult<Response> {
    let application = match submission.validate() {
        Ok(application) => application,
        Err(message) => {
            let page = render(
                &state,
                "join.html",
                context! { error => message, values => submission },
            )?;
            return Ok((StatusCode::BAD_REQUEST, page).into_response());
        }
    };

    match MemberRepo::add(&state.pool, &application).await {
        Ok(member) => {
            tracing::info!(member_id = member.id, "New membership application");
            let page = render(
                &state,
                "join.html",
                context! { submitted => true, email => member.email },
            )?;
            Ok(page.into_response())
        }
        Err(MemberAddError::DuplicateEmail(_)) => {
            let page = render(
                &state,
                "join.html",
                context! {
                    error => "An application with this email already exists",
                    values => submission,
                },
            )?;
            Ok((StatusCode::CONFLICT, page).into_response())
        }
        Err(MemberAddError::Db(err)) => Err(err.into()),
    }
}

pub async fn track_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "track.html", context! {})
}

#[derive(Debug, Deserialize)]
pub struct TrackSubmission {
    #[serde(default)]
    pub email: String,
}

/// Look up an application's review status by email.
pub async fn track_submit(
    State(state): State<AppState>,
    Form(submission): Form<TrackSubmission>,
) -> AppResult<Html<String>> {
    let email = submission.email.trim();
    if email.is_empty() {
        return render(
            &state,
            "track.html",
            context! { error => "Please enter an email address" },
        );
    }

    match MemberRepo::find_by_email(&state.pool, email).await? {
        Some(member) => render(
            &state,
            "track.html",
            context! { searched => true, application => member },
        ),
        None => render(
            &state,
            "track.html",
            context! { searched => true, email => email },
        ),
    }
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>) -> Response {
    match render(&state, "404.html", context! {}) {
        Ok(page) => (StatusCode::NOT_FOUND, page).into_response(),
        Err(err) => err.into_response(),
    }
}
