//! Session-guarded admin panel (mounted under `/admin`).
//!
//! Route hierarchy:
//!
//! ```text
//! /login                    login form (GET), credential check (POST)
//! /logout                   destroy session (POST)
//! /                         dashboard with outcome-flag banner
//!
//! /events/new               empty form
//! /events                   create (POST, multipart)
//! /events/{id}/edit         pre-filled form
//! /events/{id}              update (POST, multipart)
//! /events/{id}/delete       delete (POST)
//!
//! /team, /partners          same shape as /events
//! /questions                same shape, urlencoded (no image)
//!
//! /members/{id}/status      set application review status (POST)
//! /members/{id}/delete      remove application (POST)
//! ```
//!
//! Every route except the login pair requires an authenticated session via
//! the [`AdminSession`](crate::middleware::admin::AdminSession) extractor.
//! The body limit is raised here so multipart uploads up to the image
//! ceiling are accepted.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    admin, admin_events, admin_members, admin_partners, admin_questions, admin_team, auth,
};
use crate::state::AppState;
use crate::upload::UPLOAD_BODY_LIMIT;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/", get(admin::dashboard))
        // Events
        .route("/events/new", get(admin_events::new_form))
        .route("/events", post(admin_events::create))
        .route("/events/{id}/edit", get(admin_events::edit_form))
        .route("/events/{id}", post(admin_events::update))
        .route("/events/{id}/delete", post(admin_events::delete))
        // Team members
        .route("/team/new", get(admin_team::new_form))
        .route("/team", post(admin_team::create))
        .route("/team/{id}/edit", get(admin_team::edit_form))
        .route("/team/{id}", post(admin_team::update))
        .route("/team/{id}/delete", post(admin_team::delete))
        // Partners
        .route("/partners/new", get(admin_partners::new_form))
        .route("/partners", post(admin_partners::create))
        .route("/partners/{id}/edit", get(admin_partners::edit_form))
        .route("/partners/{id}", post(admin_partners::update))
        .route("/partners/{id}/delete", post(admin_partners::delete))
        // Questions
        .route("/questions/new", get(admin_questions::new_form))
        .route("/questions", post(admin_questions::create))
        .route("/questions/{id}/edit", get(admin_questions::edit_form))
        .route("/questions/{id}", post(admin_questions::update))
        .route("/questions/{id}/delete", post(admin_questions::delete))
        // Membership applications
        .route("/members/{id}/status", post(admin_members::update_status))
        .route("/members/{id}/delete", post(admin_members::delete))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
