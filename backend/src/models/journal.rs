//! Journal model for travel diary entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{dates, Document, Identity};

/// A travel journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    #[serde(rename = "_id")]
    pub doc_id: String,
    /// Server-generated external identity, never changes after creation
    pub journal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_travel_related: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Document for Journal {
    const COLLECTION: &'static str = "journals";
    const IDENTITY: Identity = Identity::ServerGenerated {
        column: "journal_id",
    };
}

/// The only journal fields accepted from clients, on create and on replace.
///
/// `countries` and `notTravelRelated` are not part of this set and are
/// dropped if submitted. No ordering between the two dates is enforced.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalFields {
    #[serde(default)]
    pub journal_title: Option<String>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates::deserialize_optional")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fields_drop_countries_and_flag() {
        let fields: JournalFields = serde_json::from_value(json!({
            "journalTitle": "Trip",
            "countries": ["FR"],
            "notTravelRelated": true,
            "startDate": "2024-01-01",
            "endDate": "2024-01-10",
            "images": [],
            "content": "x"
        }))
        .unwrap();

        assert_eq!(fields.journal_title.as_deref(), Some("Trip"));
        assert_eq!(fields.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(fields.end_date, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(fields.images, Some(vec![]));
    }

    #[test]
    fn test_end_before_start_is_accepted() {
        let fields: JournalFields = serde_json::from_value(json!({
            "startDate": "2024-05-10",
            "endDate": "2024-05-01"
        }))
        .unwrap();

        assert!(fields.end_date < fields.start_date);
    }

    #[test]
    fn test_empty_and_null_dates_are_unset() {
        let fields: JournalFields =
            serde_json::from_value(json!({ "startDate": "", "endDate": null })).unwrap();
        assert!(fields.start_date.is_none());
        assert!(fields.end_date.is_none());
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result: Result<JournalFields, _> =
            serde_json::from_value(json!({ "startDate": "someday" }));
        assert!(result.is_err());
    }
}
