//! Contact form endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use super::{created, ApiResult, JsonBody};
use crate::models::{ContactRequest, Message};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct MessageReceived {
    pub success: &'static str,
    pub data: Message,
}

/// POST /api/contact - Store a contact message.
pub async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> ApiResult<(StatusCode, Json<MessageReceived>)> {
    let new_message = request.validate()?;
    let message = state.repo.insert_message(new_message).await?;
    tracing::info!("Contact message {} received", message.doc_id);

    created(MessageReceived {
        success: "Message received successfully",
        data: message,
    })
}
