//! FAQ API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{ack, created, Ack, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{Faq, FaqCatalog, FaqFields};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FaqEnvelope {
    pub message: &'static str,
    pub faq: Faq,
}

fn faq_not_found() -> AppError {
    AppError::NotFound("FAQ not found".to_string())
}

/// GET /api/faqs - List FAQs grouped by category.
///
/// Store failures are reported without detail.
pub async fn list_faqs(State(state): State<AppState>) -> ApiResult<Json<FaqCatalog>> {
    let faqs = state
        .repo
        .list_faqs()
        .await
        .map_err(AppError::without_detail)?;

    Ok(Json(FaqCatalog::from_faqs(faqs)))
}

/// POST /api/faqs - Create a new FAQ.
pub async fn create_faq(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<FaqFields>,
) -> ApiResult<(StatusCode, Json<FaqEnvelope>)> {
    let faq = state.repo.insert_faq(fields).await?;

    created(FaqEnvelope {
        message: "FAQ added successfully",
        faq,
    })
}

/// PATCH /api/faqs/:id - Merge fields into an FAQ.
pub async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<FaqFields>,
) -> ApiResult<Json<FaqEnvelope>> {
    let faq = state
        .repo
        .update_faq(&id, &patch)
        .await?
        .ok_or_else(faq_not_found)?;

    Ok(Json(FaqEnvelope {
        message: "FAQ updated successfully",
        faq,
    }))
}

/// DELETE /api/faqs/:id - Delete an FAQ.
pub async fn delete_faq(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Ack>> {
    if !state.repo.delete_faq(&id).await? {
        return Err(faq_not_found());
    }

    ack("FAQ deleted successfully")
}
