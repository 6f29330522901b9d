//! Event rows and input DTOs.

use clubsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// `date` is an ISO `YYYY-MM-DD` string so lexicographic ordering matches
/// chronological ordering; `time` is free-form display text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub seats: i64,
    pub description: String,
    pub image_url: Option<String>,
}

/// Payload for inserting or fully replacing an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub seats: i64,
    pub description: String,
    pub image_url: Option<String>,
}
