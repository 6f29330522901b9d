//! Idempotent schema initialization.
//!
//! Five independent tables, no foreign keys. Runs at every startup:
//! `CREATE TABLE IF NOT EXISTS` for each table, then one additive column
//! migration that tolerates already-migrated databases.

use crate::DbPool;

const CREATE_TABLES: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        location TEXT NOT NULL,
        seats INTEGER NOT NULL,
        description TEXT NOT NULL,
        image_url TEXT
    )",
    "CREATE TABLE IF NOT EXISTS team_members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        role TEXT NOT NULL,
        category TEXT NOT NULL,
        email TEXT,
        image_url TEXT
    )",
    "CREATE TABLE IF NOT EXISTS partners (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        benefits TEXT NOT NULL,
        logo_url TEXT,
        website_url TEXT
    )",
    "CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT NOT NULL,
        subcategory TEXT NOT NULL,
        title TEXT NOT NULL,
        link TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        student_id TEXT NOT NULL,
        department TEXT NOT NULL,
        semester TEXT NOT NULL,
        phone TEXT,
        interests TEXT,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TEXT NOT NULL
    )",
];

/// Create all tables if absent, then apply the additive column migration.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    add_interests_column(pool).await?;
    tracing::info!("Database schema initialized");
    Ok(())
}

/// Databases created before the `interests` column existed gain it here.
/// Fresh schemas already have the column, so the "duplicate column name"
/// failure is expected and ignored; anything else is surfaced.
async fn add_interests_column(pool: &DbPool) -> Result<(), sqlx::Error> {
    match sqlx::query("ALTER TABLE members ADD COLUMN interests TEXT")
        .execute(pool)
        .await
    {
        Ok(_) => Ok(()),
        Err(err) if is_duplicate_column(&err) => Ok(()),
        Err(err) => Err(err),
    }
}

fn is_duplicate_column(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err)
        if db_err.message().contains("duplicate column name"))
}
