use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One generated marketplace listing for one analyzed image. Lives for a
/// single request/response cycle; never stored.
///
/// Values are whatever the model returned. Only key presence is checked
/// (`missing_keys`); the cardinality and vocabulary rules live in the
/// prompt and are advisory to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub title: String,
    pub description: String,
    pub first_main_color: String,
    pub second_main_color: String,
    pub home_style: String,
    /// Blank when no calendar holiday applies.
    pub celebration: String,
    pub occasion: String,
    /// Comma-separated, up to 3 subjects.
    pub subject: String,
    /// Comma-separated, 5 rooms.
    pub room: String,
    /// Comma-separated, 13 tags.
    pub tags: String,
    /// Citations from search-grounded backends, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<GroundingSource>>,
}

/// A citation returned by a search-grounded backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

impl ListingRecord {
    /// The ten keys the model must return, in the wire spelling.
    pub const REQUIRED_KEYS: [&'static str; 10] = [
        "title",
        "description",
        "firstMainColor",
        "secondMainColor",
        "homeStyle",
        "celebration",
        "occasion",
        "subject",
        "room",
        "tags",
    ];

    /// Which required keys are absent from a parsed model response.
    pub fn missing_keys(parsed: &Value) -> Vec<String> {
        Self::REQUIRED_KEYS
            .iter()
            .filter(|key| parsed.get(**key).is_none())
            .map(|key| key.to_string())
            .collect()
    }
}
