//! Partner rows and input DTOs.

use clubsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `partners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partner {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub benefits: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
}

/// Payload for inserting or fully replacing a partner.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    pub description: String,
    pub benefits: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
}
