//! One-time fixture seeding from bundled JSON data.
//!
//! Each table is gated on its own emptiness rather than a single gate on the
//! events table, so a partial seed failure leaves the remaining tables
//! eligible for another attempt on the next startup, and a table a prior run
//! already populated is never re-seeded.

use serde::de::DeserializeOwned;

use crate::models::event::EventInput;
use crate::models::member::MemberApplication;
use crate::models::partner::PartnerInput;
use crate::models::question::QuestionInput;
use crate::models::team_member::TeamMemberInput;
use crate::repositories::{
    EventRepo, MemberAddError, MemberRepo, PartnerRepo, QuestionRepo, Repository, TeamMemberRepo,
};
use crate::DbPool;

const EVENTS_JSON: &str = include_str!("../fixtures/events.json");
const TEAM_JSON: &str = include_str!("../fixtures/team.json");
const PARTNERS_JSON: &str = include_str!("../fixtures/partners.json");
const QUESTIONS_JSON: &str = include_str!("../fixtures/questions.json");
const MEMBERS_JSON: &str = include_str!("../fixtures/members.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to parse bundled fixture {file}: {source}")]
    Fixture {
        file: &'static str,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Populate every empty table from its bundled fixture.
pub async fn seed(pool: &DbPool) -> Result<(), SeedError> {
    if table_is_empty(pool, "events").await? {
        let rows = parse_fixture::<EventInput>("events.json", EVENTS_JSON)?;
        for input in &rows {
            EventRepo::add(pool, input).await?;
        }
        tracing::info!(rows = rows.len(), "Seeded events");
    }

    if table_is_empty(pool, "team_members").await? {
        let rows = parse_fixture::<TeamMemberInput>("team.json", TEAM_JSON)?;
        for input in &rows {
            TeamMemberRepo::add(pool, input).await?;
        }
        tracing::info!(rows = rows.len(), "Seeded team members");
    }

    if table_is_empty(pool, "partners").await? {
        let rows = parse_fixture::<PartnerInput>("partners.json", PARTNERS_JSON)?;
        for input in &rows {
            PartnerRepo::add(pool, input).await?;
        }
        tracing::info!(rows = rows.len(), "Seeded partners");
    }

    if table_is_empty(pool, "questions").await? {
        let rows = parse_fixture::<QuestionInput>("questions.json", QUESTIONS_JSON)?;
        for input in &rows {
            QuestionRepo::add(pool, input).await?;
        }
        tracing::info!(rows = rows.len(), "Seeded questions");
    }

    if table_is_empty(pool, "members").await? {
        let rows = parse_fixture::<MemberApplication>("members.json", MEMBERS_JSON)?;
        for input in &rows {
            match MemberRepo::add(pool, input).await {
                Ok(_) => {}
                // Fixture rows sharing an email cannot happen in practice,
                // but a duplicate must not abort the remaining seeding.
                Err(MemberAddError::DuplicateEmail(email)) => {
                    tracing::warn!(%email, "Skipping duplicate member fixture row");
                }
                Err(MemberAddError::Db(err)) => return Err(err.into()),
            }
        }
        tracing::info!(rows = rows.len(), "Seeded members");
    }

    Ok(())
}

async fn table_is_empty(pool: &DbPool, table: &str) -> Result<bool, sqlx::Error> {
    // Table names come from the fixed list above, never from input.
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

fn parse_fixture<T: DeserializeOwned>(
    file: &'static str,
    json: &str,
) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError::Fixture { file, source })
}
