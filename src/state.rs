use sqlx::SqlitePool;

use crate::config::CloudinaryConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Absent when the server runs without media-host credentials; the
    /// upload-params endpoints answer 503 in that case.
    pub cloudinary: Option<CloudinaryConfig>,
}
