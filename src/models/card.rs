use serde::{Deserialize, Serialize};

/// A browsable gallery tile. The image URL points at an asset already on the
/// media host; the record itself is only the metadata pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Create payload. Fields default to empty strings so a missing field is
/// rejected by validation (400) rather than by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: String,
}
