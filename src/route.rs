use std::sync::Arc;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{config::Config, handler::*, AppState};

pub fn create_router(state: Arc<AppState>, config: &Config) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/teams",
            get(get_teams_handler).post(create_team_handler),
        )
        .route(
            "/api/teams/:id",
            get(get_team_handler)
                .put(update_team_handler)
                .delete(delete_team_handler),
        )
        .route(
            "/api/players",
            get(get_players_handler).post(create_player_handler),
        )
        .route(
            "/api/players/:id",
            get(get_player_handler)
                .put(update_player_handler)
                .delete(delete_player_handler),
        )
        .route(
            "/api/coaches",
            get(get_coaches_handler).post(create_coach_handler),
        )
        .route(
            "/api/coaches/:id",
            get(get_coach_handler)
                .put(update_coach_handler)
                .delete(delete_coach_handler),
        )
        .route(
            "/api/matches",
            get(get_matches_handler).post(create_match_handler),
        )
        .route(
            "/api/matches/:id",
            get(get_match_by_id_handler)
                .put(update_match_handler)
                .delete(delete_match_handler),
        )
        .route("/api/news", get(get_news_handler).post(create_news_handler))
        .route(
            "/api/news/:id",
            get(get_news_item_handler)
                .put(update_news_handler)
                .delete(delete_news_handler),
        )
        .route(
            "/api/media",
            get(get_media_handler).post(create_media_handler),
        )
        .route(
            "/api/media/:id",
            get(get_media_item_handler)
                .put(update_media_handler)
                .delete(delete_media_handler),
        )
        .layer(cors_layer(config))
        .layer(trace_layer)
        .with_state(state)
}

/// `*` opens CORS to any origin; otherwise only the listed origins are
/// allowed, with credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, ACCEPT]);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(origins).allow_credentials(true)
}
