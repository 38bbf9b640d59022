//! Country model matching the destination pages of the web client.

use serde::{Deserialize, Serialize};

use super::{Document, Identity};

/// Banner shown at the top of a country page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Introductory "discover" section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discover {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A stored country page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(rename = "_id")]
    pub doc_id: String,
    /// Caller-supplied lookup key; may collide with other documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discover: Option<Discover>,
    #[serde(default)]
    pub info_cards: Vec<InfoCard>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Document for Country {
    const COLLECTION: &'static str = "countries";
    const IDENTITY: Identity = Identity::CallerSupplied { column: "id" };
}

/// Request body for creating or patching a country.
///
/// On create every field is taken as given. On patch only the fields present
/// in the body replace the stored ones; nested objects are replaced whole.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryFields {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default)]
    pub discover: Option<Discover>,
    #[serde(default)]
    pub info_cards: Option<Vec<InfoCard>>,
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
}

impl CountryFields {
    /// Build a new document from a create request.
    pub fn into_country(self, doc_id: String) -> Country {
        Country {
            doc_id,
            id: self.id,
            hero: self.hero,
            discover: self.discover,
            info_cards: self.info_cards.unwrap_or_default(),
            activities: self.activities.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_ignored() {
        let fields: CountryFields = serde_json::from_value(json!({
            "id": "japan",
            "hero": { "title": "Japan", "buttonText": "Explore" },
            "population": 125_000_000
        }))
        .unwrap();

        let country = fields.into_country("doc-1".to_string());
        let value = serde_json::to_value(&country).unwrap();

        assert_eq!(value["_id"], "doc-1");
        assert_eq!(value["id"], "japan");
        assert_eq!(value["hero"]["buttonText"], "Explore");
        assert!(value["hero"].get("image").is_none());
        assert_eq!(value["infoCards"], json!([]));
        assert!(value.get("population").is_none());
    }
}
