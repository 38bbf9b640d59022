//! Country API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::{ack, created, Ack, ApiResult, JsonBody};
use crate::errors::AppError;
use crate::models::{Country, CountryFields};
use crate::AppState;

/// Country document with an acknowledgment message.
#[derive(Debug, Serialize)]
pub struct CountryEnvelope {
    pub message: &'static str,
    pub data: Country,
}

/// GET /api/countries - List all countries.
pub async fn list_countries(State(state): State<AppState>) -> ApiResult<Json<Vec<Country>>> {
    Ok(Json(state.repo.list_countries().await?))
}

/// GET /api/countries/:id - Get a single country.
pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Country>> {
    match state.repo.find_country(&id).await? {
        Some(country) => Ok(Json(country)),
        None => Err(AppError::NotFound("Country not found".to_string())),
    }
}

/// POST /api/countries - Create a new country.
pub async fn create_country(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<CountryFields>,
) -> ApiResult<(StatusCode, Json<CountryEnvelope>)> {
    let country = state.repo.insert_country(fields).await?;
    tracing::debug!("Created country {:?} ({})", country.id, country.doc_id);

    created(CountryEnvelope {
        message: "New country data added successfully",
        data: country,
    })
}

/// PATCH /api/countries/:id - Merge fields into a country.
pub async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<CountryFields>,
) -> ApiResult<Json<CountryEnvelope>> {
    let country = state
        .repo
        .update_country(&id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound("Data not found".to_string()))?;

    Ok(Json(CountryEnvelope {
        message: "Country data updated successfully",
        data: country,
    }))
}

/// DELETE /api/countries/:id - Delete a country.
pub async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Ack>> {
    if !state.repo.delete_country(&id).await? {
        return Err(AppError::NotFound("Data not found".to_string()));
    }

    tracing::debug!("Deleted country {}", id);
    ack("Country data deleted successfully")
}
