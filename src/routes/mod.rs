mod audio;
mod cards;
mod health;
mod upload_params;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/cards",
            get(cards::list_cards)
                .post(cards::create_card)
                .delete(cards::delete_card),
        )
        .route(
            "/audio",
            get(audio::list_clips)
                .post(audio::create_clip)
                .delete(audio::delete_clip),
        )
        .route("/upload-params/image", get(upload_params::image_params))
        .route("/upload-params/audio", get(upload_params::audio_params))
        .route("/version", get(health::version))
}
