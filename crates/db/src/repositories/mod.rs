//! Per-entity repositories behind one uniform CRUD interface.

mod event_repo;
mod member_repo;
mod partner_repo;
mod question_repo;
mod team_member_repo;

pub use event_repo::EventRepo;
pub use member_repo::{MemberAddError, MemberRepo};
pub use partner_repo::PartnerRepo;
pub use question_repo::QuestionRepo;
pub use team_member_repo::TeamMemberRepo;

use async_trait::async_trait;
use clubsite_core::types::DbId;

use crate::DbPool;

/// Uniform CRUD surface over one entity table.
///
/// Every admin content sub-workflow is a thin call through this interface;
/// entity-specific reads (upcoming events, category filters, email lookup)
/// live as inherent methods on the individual repos. Edits are unconditional
/// full-field replacements, so insert and update share one input type.
#[async_trait]
pub trait Repository {
    /// Row type returned by reads.
    type Row: Send + Unpin;
    /// Payload for insert and full-field update.
    type Input: Send + Sync;

    /// Entity name used in logs and error messages.
    const ENTITY: &'static str;

    /// Insert a new row, returning it with its assigned identity.
    async fn add(pool: &DbPool, input: &Self::Input) -> Result<Self::Row, sqlx::Error>;

    /// All rows, in the entity's natural order.
    async fn get_all(pool: &DbPool) -> Result<Vec<Self::Row>, sqlx::Error>;

    /// A single row by identity.
    async fn get_by_id(pool: &DbPool, id: DbId) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Replace every field of the row with the given identity. Returns the
    /// updated row, or `None` when no such row exists.
    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &Self::Input,
    ) -> Result<Option<Self::Row>, sqlx::Error>;

    /// Delete the row with the given identity. Returns whether a row was
    /// actually removed; deleting a missing identity is not an error.
    async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error>;
}
