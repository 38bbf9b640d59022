//! Journal API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{ack, created, Ack, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{Journal, JournalFields};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct JournalCreated {
    pub message: &'static str,
    pub journal: Journal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalUpdated {
    pub message: &'static str,
    pub updated_journal: Journal,
}

fn journal_not_found() -> AppError {
    AppError::NotFound("Journal not found".to_string())
}

/// POST /api/journals - Create a new journal.
pub async fn create_journal(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<JournalFields>,
) -> ApiResult<(StatusCode, Json<JournalCreated>)> {
    let journal = state.repo.insert_journal(fields).await?;
    tracing::debug!("Created journal {}", journal.journal_id);

    created(JournalCreated {
        message: "Journal created successfully",
        journal,
    })
}

/// GET /api/journals - List all journals.
pub async fn list_journals(State(state): State<AppState>) -> ApiResult<Json<Vec<Journal>>> {
    Ok(Json(state.repo.list_journals().await?))
}

/// GET /api/journals/:journalId - Get a single journal.
pub async fn get_journal(
    State(state): State<AppState>,
    Path(journal_id): Path<String>,
) -> ApiResult<Json<Journal>> {
    state
        .repo
        .find_journal(&journal_id)
        .await?
        .map(Json)
        .ok_or_else(journal_not_found)
}

/// PUT /api/journals/:journalId - Replace the editable fields of a journal.
pub async fn replace_journal(
    State(state): State<AppState>,
    Path(journal_id): Path<String>,
    JsonBody(fields): JsonBody<JournalFields>,
) -> ApiResult<Json<JournalUpdated>> {
    let journal = state
        .repo
        .replace_journal(&journal_id, &fields)
        .await?
        .ok_or_else(journal_not_found)?;

    Ok(Json(JournalUpdated {
        message: "Journal updated successfully",
        updated_journal: journal,
    }))
}

/// DELETE /api/journals/:journalId - Delete a journal.
pub async fn delete_journal(
    State(state): State<AppState>,
    Path(journal_id): Path<String>,
) -> ApiResult<Json<Ack>> {
    if !state.repo.delete_journal(&journal_id).await? {
        return Err(journal_not_found());
    }

    tracing::debug!("Deleted journal {}", journal_id);
    ack("Journal deleted successfully")
}
