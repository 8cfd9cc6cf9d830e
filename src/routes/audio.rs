use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::audio::{AudioClip, CreateAudioClip};
use crate::models::card::DeleteRequest;
use crate::state::AppState;

pub async fn list_clips(state: State<AppState>) -> Result<Json<Vec<AudioClip>>, AppError> {
    let clips = db::audio::list_clips(&state.db).await?;
    Ok(Json(clips))
}

/// The clip must already live on the media host; this only records the
/// metadata pointer. Validation happens before any row is written.
pub async fn create_clip(
    state: State<AppState>,
    Json(input): Json<CreateAudioClip>,
) -> Result<(StatusCode, Json<AudioClip>), AppError> {
    let name = input.name.trim();
    let src = input.src.trim();

    if name.is_empty() || src.is_empty() {
        return Err(AppError::BadRequest("name and src are required".to_string()));
    }

    let clip = db::audio::create_clip(&state.db, name, src).await?;
    Ok((StatusCode::CREATED, Json(clip)))
}

pub async fn delete_clip(
    state: State<AppState>,
    Json(input): Json<DeleteRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = input.id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("id is required".to_string()));
    }

    db::audio::delete_clip(&state.db, id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
