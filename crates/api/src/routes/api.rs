//! Read-only JSON endpoints (mounted under `/api`).
//!
//! Route hierarchy:
//!
//! ```text
//! /events           all events, newest date first
//! /events/upcoming  events dated today or later, soonest first
//! /team             all team members
//! /partners         all partners
//! /questions        all questions
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::api;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(api::list_events))
        .route("/events/upcoming", get(api::list_upcoming_events))
        .route("/team", get(api::list_team))
        .route("/partners", get(api::list_partners))
        .route("/questions", get(api::list_questions))
}
