//! Contact form submissions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Document, Identity};
use crate::errors::AppError;

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id")]
    pub doc_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Document for Message {
    const COLLECTION: &'static str = "messages";
    const IDENTITY: Identity = Identity::StoreInternal;
}

/// Request body for the contact form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Require all three fields to be present and non-empty.
    pub fn validate(self) -> Result<NewMessage, AppError> {
        match (non_empty(self.name), non_empty(self.email), non_empty(self.message)) {
            (Some(name), Some(email), Some(message)) => Ok(NewMessage {
                name,
                email,
                message,
            }),
            _ => Err(AppError::BadRequest("All fields are required".to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
