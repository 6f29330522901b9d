//! Membership application rows and input DTOs.

use clubsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `members` table (one membership application).
///
/// `status` holds one of the recognized values in
/// [`clubsite_core::membership::RECOGNIZED_STATUSES`]; it starts as
/// `pending` and is only ever changed by the admin review action.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub semester: String,
    pub phone: Option<String>,
    pub interests: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// Payload for a new membership application. Status and creation time are
/// assigned by the store layer, never by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberApplication {
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub semester: String,
    pub phone: Option<String>,
    pub interests: Option<String>,
}
