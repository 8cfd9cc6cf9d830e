use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::error::AppError;
use crate::media_host::{AssetKind, UploadParams};
use crate::signing;
use crate::state::AppState;

pub async fn image_params(state: State<AppState>) -> Result<Json<UploadParams>, AppError> {
    signed_params(&state, AssetKind::Image)
}

pub async fn audio_params(state: State<AppState>) -> Result<Json<UploadParams>, AppError> {
    signed_params(&state, AssetKind::Audio)
}

/// Sign `{folder, timestamp}` with the server-held secret. Only the digest
/// goes to the client, which uploads directly to the media host with it.
fn signed_params(state: &AppState, kind: AssetKind) -> Result<Json<UploadParams>, AppError> {
    let cloudinary = state.cloudinary.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("media host not configured".to_string())
    })?;

    let timestamp = Utc::now().timestamp();
    let signature = signing::sign_upload_request(kind.folder(), timestamp, &cloudinary.api_secret);

    Ok(Json(UploadParams {
        cloud_name: cloudinary.cloud_name.clone(),
        api_key: cloudinary.api_key.clone(),
        signature,
        timestamp,
        folder: kind.folder().to_string(),
        resource_type: kind.resource_type().to_string(),
    }))
}
