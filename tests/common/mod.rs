#![allow(dead_code)]

use axum::body::Body;
use chimeboard::config::CloudinaryConfig;
use chimeboard::db;
use chimeboard::routes;
use chimeboard::state::AppState;
use http::{Method, Request};
use sqlx::SqlitePool;

/// Test server owning an in-memory SQLite pool and full AppState.
/// Each instance is isolated, safe for parallel tests.
pub struct TestServer {
    pub state: AppState,
}

impl TestServer {
    /// Create a TestServer with media-host credentials configured.
    pub async fn new() -> Self {
        Self::with_cloudinary(Some(CloudinaryConfig {
            cloud_name: "test-cloud".to_string(),
            api_key: "test-key".to_string(),
            api_secret: "test-secret".to_string(),
        }))
        .await
    }

    /// Create a TestServer without media-host credentials, so the
    /// upload-params endpoints degrade to 503.
    pub async fn without_media_host() -> Self {
        Self::with_cloudinary(None).await
    }

    async fn with_cloudinary(cloudinary: Option<CloudinaryConfig>) -> Self {
        let pool = db::create_pool("sqlite::memory:")
            .await
            .expect("failed to create test pool");

        Self {
            state: AppState {
                db: pool,
                cloudinary,
            },
        }
    }

    /// Axum router wired to this server's state, for `oneshot()` calls.
    pub fn router(&self) -> axum::Router {
        routes::router(self.state.clone())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.db
    }

    /// Insert a card directly, bypassing the HTTP layer.
    pub async fn create_card(&self, title: &str, image: &str) -> String {
        let card = db::cards::create_card(self.pool(), title, "", image)
            .await
            .expect("failed to create test card");
        card.id
    }

    /// Insert an audio clip directly, bypassing the HTTP layer.
    pub async fn create_clip(&self, name: &str, src: &str) -> String {
        let clip = db::audio::create_clip(self.pool(), name, src)
            .await
            .expect("failed to create test clip");
        clip.id
    }

    pub async fn count_cards(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM cards")
            .fetch_one(self.pool())
            .await
            .expect("failed to count cards")
    }

    pub async fn count_clips(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM audio_clips")
            .fetch_one(self.pool())
            .await
            .expect("failed to count clips")
    }
}

// ---------------------------------------------------------------------------
// Request builder helpers
// ---------------------------------------------------------------------------

/// Build a request with no body.
pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a request with a JSON body.
pub fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Parse a response body into a `serde_json::Value`.
pub async fn parse_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
