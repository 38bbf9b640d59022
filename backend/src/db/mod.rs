//! Database module for document persistence.
//!
//! Each collection lives in its own SQLite table; nested fields are kept as
//! JSON text.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::models::{Country, Document, Faq, Journal, Message};

/// Open the connection pool and make sure every collection exists.
pub async fn init_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // Ensure the parent directory exists
    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    create_collections(&pool).await?;

    Ok(pool)
}

/// Create collection tables and key indexes if they don't exist.
async fn create_collections(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS countries (
            doc_id TEXT PRIMARY KEY,
            id TEXT,
            hero TEXT,
            discover TEXT,
            info_cards TEXT NOT NULL DEFAULT '[]',
            activities TEXT NOT NULL DEFAULT '[]'
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS journals (
            doc_id TEXT PRIMARY KEY,
            journal_id TEXT NOT NULL,
            journal_title TEXT,
            countries TEXT,
            not_travel_related INTEGER,
            start_date TEXT,
            end_date TEXT,
            created_at TEXT NOT NULL,
            images TEXT,
            content TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS faqs (
            doc_id TEXT PRIMARY KEY,
            category TEXT,
            question TEXT,
            answer TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            doc_id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    create_key_index::<Country>(pool).await?;
    create_key_index::<Journal>(pool).await?;
    create_key_index::<Faq>(pool).await?;
    create_key_index::<Message>(pool).await?;

    Ok(())
}

/// Index the lookup key of a collection, unique where its identity demands it.
async fn create_key_index<D: Document>(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let identity = D::IDENTITY;
    let column = identity.key_column();
    if column == "doc_id" {
        // Primary key already
        return Ok(());
    }

    let unique = if identity.is_unique() { "UNIQUE " } else { "" };
    let sql = format!(
        "CREATE {unique}INDEX IF NOT EXISTS idx_{table}_{column} ON {table}({column})",
        table = D::COLLECTION,
    );
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}
