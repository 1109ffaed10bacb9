use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{groups, health, players};
use crate::api::state::AppState;

/// Builds the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/teams", get(players::list_teams))
        .route(
            "/api/groups",
            get(groups::list_groups).post(groups::create_group),
        )
        .route(
            "/api/groups/:group",
            get(groups::get_group).delete(groups::delete_group),
        )
        .route(
            "/api/groups/:group/players",
            get(players::list_players).post(players::add_player),
        )
        .route(
            "/api/groups/:group/players/:player",
            delete(players::remove_player),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
