//! Data models for the Travel Diaries application.
//!
//! These models match the JSON documents the web client reads and writes.

mod country;
mod dates;
mod faq;
mod journal;
mod message;

pub use country::*;
pub use faq::*;
pub use journal::*;
pub use message::*;

/// How documents of a collection are identified by API callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    /// The caller supplies the key; the store does not enforce uniqueness.
    CallerSupplied { column: &'static str },
    /// The server generates the key once at creation; unique and immutable.
    ServerGenerated { column: &'static str },
    /// Only the store-internal `_id` identifies the document.
    StoreInternal,
}

impl Identity {
    /// Column holding the lookup key.
    pub fn key_column(&self) -> &'static str {
        match self {
            Identity::CallerSupplied { column } | Identity::ServerGenerated { column } => column,
            Identity::StoreInternal => "doc_id",
        }
    }

    /// Whether the store must reject duplicate keys.
    pub fn is_unique(&self) -> bool {
        !matches!(self, Identity::CallerSupplied { .. })
    }
}

/// A document collection and its identity strategy.
pub trait Document {
    /// Name of the backing collection.
    const COLLECTION: &'static str;
    /// How callers address a single document.
    const IDENTITY: Identity;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_strategies() {
        assert_eq!(Country::IDENTITY.key_column(), "id");
        assert!(!Country::IDENTITY.is_unique());

        assert_eq!(Journal::IDENTITY.key_column(), "journal_id");
        assert!(Journal::IDENTITY.is_unique());

        assert_eq!(Faq::IDENTITY.key_column(), "doc_id");
        assert_eq!(Message::IDENTITY, Identity::StoreInternal);
    }
}
