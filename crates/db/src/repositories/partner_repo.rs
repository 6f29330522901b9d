//! Repository for the `partners` table.

use async_trait::async_trait;
use clubsite_core::types::DbId;

use crate::models::partner::{Partner, PartnerInput};
use crate::DbPool;

use super::Repository;

const COLUMNS: &str = "id, name, description, benefits, logo_url, website_url";

/// CRUD operations for partners.
pub struct PartnerRepo;

#[async_trait]
impl Repository for PartnerRepo {
    type Row = Partner;
    type Input = PartnerInput;

    const ENTITY: &'static str = "Partner";

    async fn add(pool: &DbPool, input: &PartnerInput) -> Result<Partner, sqlx::Error> {
        let query = format!(
            "INSERT INTO partners (name, description, benefits, logo_url, website_url) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.benefits)
            .bind(&input.logo_url)
            .bind(&input.website_url)
            .fetch_one(pool)
            .await
    }

    async fn get_all(pool: &DbPool) -> Result<Vec<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partners ORDER BY id ASC");
        sqlx::query_as::<_, Partner>(&query).fetch_all(pool).await
    }

    async fn get_by_id(pool: &DbPool, id: DbId) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM partners WHERE id = ?");
        sqlx::query_as::<_, Partner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &PartnerInput,
    ) -> Result<Option<Partner>, sqlx::Error> {
        let query = format!(
            "UPDATE partners SET \
                name = ?, description = ?, benefits = ?, logo_url = ?, website_url = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Partner>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.benefits)
            .bind(&input.logo_url)
            .bind(&input.website_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM partners WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
