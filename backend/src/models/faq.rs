//! FAQ model and the category-grouped view served to the help page.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::{Document, Identity};

/// A stored FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "_id")]
    pub doc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Document for Faq {
    const COLLECTION: &'static str = "faqs";
    const IDENTITY: Identity = Identity::StoreInternal;
}

/// Request body for creating or patching an FAQ.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FaqFields {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Question/answer pair as listed under a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// FAQs grouped by category.
///
/// Serialises as a JSON object whose keys keep first-seen order. Entries
/// without a category are grouped under the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqCatalog {
    groups: Vec<(String, Vec<FaqEntry>)>,
}

impl FaqCatalog {
    /// Fold FAQs, in store scan order, into category groups.
    pub fn from_faqs(faqs: impl IntoIterator<Item = Faq>) -> Self {
        let mut catalog = Self::default();
        for faq in faqs {
            let category = faq.category.unwrap_or_default();
            let entry = FaqEntry {
                question: faq.question,
                answer: faq.answer,
            };
            match catalog.groups.iter_mut().find(|(name, _)| *name == category) {
                Some((_, entries)) => entries.push(entry),
                None => catalog.groups.push((category, vec![entry])),
            }
        }
        catalog
    }
}

impl Serialize for FaqCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (category, entries) in &self.groups {
            map.serialize_entry(category, entries)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: &str, category: Option<&str>, question: &str, answer: &str) -> Faq {
        Faq {
            doc_id: id.to_string(),
            category: category.map(str::to_string),
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
        }
    }

    #[test]
    fn test_grouping_keeps_first_seen_order() {
        let catalog = FaqCatalog::from_faqs(vec![
            faq("1", Some("A"), "q1", "a1"),
            faq("2", Some("B"), "q2", "a2"),
            faq("3", Some("A"), "q3", "a3"),
        ]);

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(
            json,
            r#"{"A":[{"question":"q1","answer":"a1"},{"question":"q3","answer":"a3"}],"B":[{"question":"q2","answer":"a2"}]}"#
        );
    }

    #[test]
    fn test_later_category_first_seen_wins() {
        let catalog = FaqCatalog::from_faqs(vec![
            faq("1", Some("Visas"), "q1", "a1"),
            faq("2", Some("Booking"), "q2", "a2"),
        ]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.find("Visas").unwrap() < json.find("Booking").unwrap());
    }

    #[test]
    fn test_missing_category_groups_under_empty_key() {
        let catalog = FaqCatalog::from_faqs(vec![faq("1", None, "q", "a")]);
        assert_eq!(
            serde_json::to_string(&catalog).unwrap(),
            r#"{"":[{"question":"q","answer":"a"}]}"#
        );
    }

    #[test]
    fn test_empty_catalog_serialises_as_object() {
        let catalog = FaqCatalog::from_faqs(Vec::new());
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "{}");
    }
}
