//! HTTP handlers, grouped by surface.

pub mod admin;
pub mod admin_events;
pub mod admin_members;
pub mod admin_partners;
pub mod admin_questions;
pub mod admin_team;
pub mod api;
pub mod auth;
pub mod pages;
