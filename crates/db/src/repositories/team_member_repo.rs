//! Repository for the `team_members` table.

use async_trait::async_trait;
use clubsite_core::types::DbId;

use crate::models::team_member::{TeamMember, TeamMemberInput};
use crate::DbPool;

use super::Repository;

const COLUMNS: &str = "id, name, role, category, email, image_url";

/// CRUD operations for team members.
pub struct TeamMemberRepo;

#[async_trait]
impl Repository for TeamMemberRepo {
    type Row = TeamMember;
    type Input = TeamMemberInput;

    const ENTITY: &'static str = "TeamMember";

    async fn add(pool: &DbPool, input: &TeamMemberInput) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, role, category, email, image_url) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.category)
            .bind(&input.email)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    async fn get_all(pool: &DbPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY id ASC");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    async fn get_by_id(pool: &DbPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = ?");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &TeamMemberInput,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET \
                name = ?, role = ?, category = ?, email = ?, image_url = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.category)
            .bind(&input.email)
            .bind(&input.image_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl TeamMemberRepo {
    /// Members of one category, in insertion order.
    pub async fn get_by_category(
        pool: &DbPool,
        category: &str,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE category = ? ORDER BY id ASC");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
