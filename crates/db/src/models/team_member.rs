//! Team member rows and input DTOs.

use clubsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub category: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

/// Payload for inserting or fully replacing a team member.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberInput {
    pub name: String,
    pub role: String,
    pub category: String,
    pub email: Option<String>,
    pub image_url: Option<String>,
}
