//! Read-only JSON endpoints mirroring the public page data.

use axum::extract::State;
use axum::Json;

use clubsite_db::models::event::Event;
use clubsite_db::models::partner::Partner;
use clubsite_db::models::question::Question;
use clubsite_db::models::team_member::TeamMember;
use clubsite_db::repositories::{EventRepo, PartnerRepo, QuestionRepo, Repository, TeamMemberRepo};

use crate::error::AppResult;
use crate::state::AppState;

pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(EventRepo::get_all(&state.pool).await?))
}

pub async fn list_upcoming_events(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(EventRepo::get_upcoming(&state.pool).await?))
}

pub async fn list_team(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(TeamMemberRepo::get_all(&state.pool).await?))
}

pub async fn list_partners(State(state): State<AppState>) -> AppResult<Json<Vec<Partner>>> {
    Ok(Json(PartnerRepo::get_all(&state.pool).await?))
}

pub async fn list_questions(State(state): State<AppState>) -> AppResult<Json<Vec<Question>>> {
    Ok(Json(QuestionRepo::get_all(&state.pool).await?))
}
