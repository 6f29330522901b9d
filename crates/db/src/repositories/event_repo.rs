//! Repository for the `events` table.

use async_trait::async_trait;
use clubsite_core::types::DbId;

use crate::models::event::{Event, EventInput};
use crate::DbPool;

use super::Repository;

const COLUMNS: &str = "id, title, date, time, location, seats, description, image_url";

/// CRUD operations for events.
pub struct EventRepo;

#[async_trait]
impl Repository for EventRepo {
    type Row = Event;
    type Input = EventInput;

    const ENTITY: &'static str = "Event";

    async fn add(pool: &DbPool, input: &EventInput) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (title, date, time, location, seats, description, image_url) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(input.seats)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// All events, most recent date first.
    async fn get_all(pool: &DbPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY date DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    async fn get_by_id(pool: &DbPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = ?");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &EventInput,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                title = ?, date = ?, time = ?, location = ?, \
                seats = ?, description = ?, image_url = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(input.seats)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl EventRepo {
    /// Events dated today or later, soonest first.
    pub async fn get_upcoming(pool: &DbPool) -> Result<Vec<Event>, sqlx::Error> {
        let today = chrono::Utc::now().date_naive().to_string();
        let query = format!("SELECT {COLUMNS} FROM events WHERE date >= ? ORDER BY date ASC");
        sqlx::query_as::<_, Event>(&query)
            .bind(today)
            .fetch_all(pool)
            .await
    }
}
