use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::db;
use crate::error::AppError;
use crate::models::card::{Card, CreateCard, DeleteRequest};
use crate::state::AppState;

pub async fn list_cards(state: State<AppState>) -> Result<Json<Vec<Card>>, AppError> {
    let cards = db::cards::list_cards(&state.db).await?;
    Ok(Json(cards))
}

/// Required fields are validated after trimming, before any row is written.
pub async fn create_card(
    state: State<AppState>,
    Json(input): Json<CreateCard>,
) -> Result<(StatusCode, Json<Card>), AppError> {
    let title = input.title.trim();
    let description = input.description.trim();
    let image = input.image.trim();

    if title.is_empty() || image.is_empty() {
        return Err(AppError::BadRequest(
            "title and image are required".to_string(),
        ));
    }

    let card = db::cards::create_card(&state.db, title, description, image).await?;
    Ok((StatusCode::CREATED, Json(card)))
}

/// Deleting an unknown id still reports success; the store does not
/// distinguish "already deleted" from other outcomes.
pub async fn delete_card(
    state: State<AppState>,
    Json(input): Json<DeleteRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = input.id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("id is required".to_string()));
    }

    db::cards::delete_card(&state.db, id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
