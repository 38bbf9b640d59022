//! REST API module.
//!
//! One handler module per collection, mounted under `/api` by the router.

mod contact;
mod countries;
mod faqs;
mod journals;

pub use contact::*;
pub use countries::*;
pub use faqs::*;
pub use journals::*;

use axum::{extract::FromRequest, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;

/// JSON request body whose rejections render as [`AppError`] responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Response type for every handler.
pub type ApiResult<T> = Result<T, AppError>;

/// Plain acknowledgment body.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub message: &'static str,
}

/// Acknowledge an operation that returns no document.
pub fn ack(message: &'static str) -> ApiResult<Json<Ack>> {
    Ok(Json(Ack { message }))
}

/// Wrap a body in a `201 Created` response.
pub fn created<T: Serialize>(body: T) -> ApiResult<(StatusCode, Json<T>)> {
    Ok((StatusCode::CREATED, Json(body)))
}
