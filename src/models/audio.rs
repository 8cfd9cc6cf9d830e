use serde::{Deserialize, Serialize};

/// A named playable sound record. `src` is the media-host URL of the clip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioClip {
    pub id: String,
    pub name: String,
    pub src: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateAudioClip {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub src: String,
}
