//! Public server-rendered pages.
//!
//! Route hierarchy:
//!
//! ```text
//! /            home (upcoming events + partners)
//! /events      events page (upcoming/past split)
//! /team        team grouped by category
//! /partners    partner list
//! /questions   question bank grouped by category/subcategory
//! /join        membership application form (GET, POST)
//! /track       application status lookup (GET, POST)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/events", get(pages::events))
        .route("/team", get(pages::team))
        .route("/partners", get(pages::partners))
        .route("/questions", get(pages::questions))
        .route("/join", get(pages::join_form).post(pages::join_submit))
        .route("/track", get(pages::track_form).post(pages::track_submit))
}
