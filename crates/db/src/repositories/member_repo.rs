//! Repository for the `members` table (membership applications).
//!
//! Members are not part of the uniform content-CRUD interface: applications
//! are created by visitors, reviewed (status only) by the admin, and never
//! edited wholesale.

use clubsite_core::types::DbId;

use crate::models::member::{Member, MemberApplication};
use crate::DbPool;

const COLUMNS: &str =
    "id, name, email, student_id, department, semester, phone, interests, status, created_at";

/// Failure modes of [`MemberRepo::add`].
#[derive(Debug, thiserror::Error)]
pub enum MemberAddError {
    /// An application with this email already exists.
    #[error("an application with email {0} already exists")]
    DuplicateEmail(String),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Operations for membership applications.
pub struct MemberRepo;

impl MemberRepo {
    /// Insert a new application with status `pending` and the current time.
    ///
    /// The email is pre-checked so callers get a friendly duplicate message;
    /// the table's UNIQUE constraint remains the authoritative guard, and a
    /// constraint violation that slips past the pre-check is reported as the
    /// same duplicate condition.
    pub async fn add(
        pool: &DbPool,
        input: &MemberApplication,
    ) -> Result<Member, MemberAddError> {
        if Self::find_by_email(pool, &input.email).await?.is_some() {
            return Err(MemberAddError::DuplicateEmail(input.email.clone()));
        }

        let created_at = chrono::Utc::now();
        let query = format!(
            "INSERT INTO members \
                (name, email, student_id, department, semester, phone, interests, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 'pending', ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.student_id)
            .bind(&input.department)
            .bind(&input.semester)
            .bind(&input.phone)
            .bind(&input.interests)
            .bind(created_at)
            .fetch_one(pool)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    MemberAddError::DuplicateEmail(input.email.clone())
                } else {
                    MemberAddError::Db(err)
                }
            })
    }

    /// All applications, newest first (identity as tie-break).
    pub async fn list_recent(pool: &DbPool) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Member>(&query).fetch_all(pool).await
    }

    pub async fn get_by_id(pool: &DbPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = ?");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_email(
        pool: &DbPool,
        email: &str,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE email = ?");
        sqlx::query_as::<_, Member>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Set an application's review status. Returns whether a row changed.
    ///
    /// The value must already have passed
    /// [`clubsite_core::membership::validate_status`]; this layer writes it
    /// verbatim.
    pub async fn update_status(
        pool: &DbPool,
        id: DbId,
        status: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE members SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err)
        if db_err.message().contains("UNIQUE constraint failed"))
}
