use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// -- Create --

/// Body of `POST /guestbook`. `name` and `message` are checked for presence
/// before the store is contacted; anything else the caller sent rides along
/// in `extra` and reaches the insert unmodified — the store decides whether
/// unknown columns are an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateEntryRequest {
    /// Presence only — an empty string passes. JSON `null` counts as absent.
    pub fn has_required_fields(&self) -> bool {
        self.name.is_some() && self.message.is_some()
    }
}

// -- Update --

/// Body of `PUT /guestbook/{id}`. All fields optional; only the supplied
/// ones are serialized, so the store PATCH never touches the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// -- Delete --

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
