//! Question bank rows and input DTOs.

use clubsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub category: String,
    pub subcategory: String,
    pub title: String,
    pub link: String,
}

/// Payload for inserting or fully replacing a question.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionInput {
    pub category: String,
    pub subcategory: String,
    pub title: String,
    pub link: String,
}
