//! Axum router construction for the Pokedex API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled and request tracing via [`TraceLayer`].

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::pokemon;
use crate::state::AppState;
use crate::trainers;

/// Build the complete Axum router for the Pokedex server.
///
/// The router includes:
/// - `GET | POST | PATCH | DELETE /trainer` -- trainer CRUD
/// - `GET | POST | PATCH | DELETE /pokemon` -- pokemon CRUD
/// - `GET /pokemon/{trainerName}` -- one trainer's pokemon
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/trainer",
            get(trainers::list_trainers)
                .post(trainers::create_trainer)
                .patch(trainers::rename_trainer)
                .delete(trainers::retire_trainer),
        )
        .route(
            "/pokemon",
            get(pokemon::list_pokemon)
                .post(pokemon::catch_pokemon)
                .patch(pokemon::level_up_pokemon)
                .delete(pokemon::release_pokemon),
        )
        .route("/pokemon/{trainerName}", get(pokemon::list_pokemon))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
