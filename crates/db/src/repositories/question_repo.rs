//! Repository for the `questions` table.

use async_trait::async_trait;
use clubsite_core::types::DbId;

use crate::models::question::{Question, QuestionInput};
use crate::DbPool;

use super::Repository;

const COLUMNS: &str = "id, category, subcategory, title, link";

/// CRUD operations for the question bank.
pub struct QuestionRepo;

#[async_trait]
impl Repository for QuestionRepo {
    type Row = Question;
    type Input = QuestionInput;

    const ENTITY: &'static str = "Question";

    async fn add(pool: &DbPool, input: &QuestionInput) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (category, subcategory, title, link) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.title)
            .bind(&input.link)
            .fetch_one(pool)
            .await
    }

    /// All questions, grouped-friendly order: category, then subcategory,
    /// then insertion order.
    async fn get_all(pool: &DbPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY category, subcategory, id ASC");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    async fn get_by_id(pool: &DbPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = ?");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &QuestionInput,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET \
                category = ?, subcategory = ?, title = ?, link = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.category)
            .bind(&input.subcategory)
            .bind(&input.title)
            .bind(&input.link)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl QuestionRepo {
    /// Questions of one category, ordered by subcategory then insertion.
    pub async fn get_by_category(
        pool: &DbPool,
        category: &str,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM questions WHERE category = ? ORDER BY subcategory, id ASC");
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }
}
