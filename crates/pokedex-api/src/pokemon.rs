//! Request handlers for the `/pokemon` routes.
//!
//! Pokemon are addressed by their owner's name plus the pokemon type,
//! so every mutation resolves the trainer first and then the pokemon.
//! Catch and release adjust the owner's `poke_count` inside the same
//! transaction as the row change (data-layer guarantee).

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use pokedex_db::{PokemonId, TrainerId};

use crate::error::{ApiError, require};
use crate::state::AppState;
use crate::trainers::resolve_trainer;

// ---------------------------------------------------------------------------
// Request body structs
// ---------------------------------------------------------------------------

/// Request body for `POST /pokemon`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchPokemonRequest {
    /// The owning trainer's name.
    pub trainer_name: Option<String>,
    /// Type classification of the new pokemon.
    pub pokemon_type: Option<String>,
    /// Image URL, immutable after creation.
    pub pokemon_img_url: Option<String>,
}

/// Request body for `PATCH /pokemon` and `DELETE /pokemon`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonByTypeRequest {
    /// The owning trainer's name.
    pub trainer_name: Option<String>,
    /// Type of the pokemon to level up or release.
    pub pokemon_type: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /pokemon and GET /pokemon/{trainerName} -- list pokemon
// ---------------------------------------------------------------------------

/// List pokemon, optionally scoped to one trainer.
///
/// Without a path segment, every pokemon row is returned. With one,
/// the trainer is resolved first and only its pokemon are returned;
/// an unknown name fails with 400 `Trainer Not Found` rather than
/// falling back to the unfiltered listing.
pub async fn list_pokemon(
    State(state): State<Arc<AppState>>,
    trainer_name: Option<Path<String>>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = match trainer_name {
        Some(Path(name)) => {
            let id = resolve_trainer(&state, &name).await?;
            state.pokemon().list_for_trainer(id).await?
        }
        None => state.pokemon().list_all().await?,
    };
    Ok(Json(rows))
}

// ---------------------------------------------------------------------------
// POST /pokemon -- catch a pokemon
// ---------------------------------------------------------------------------

/// Catch a pokemon for a trainer, returning the created row.
///
/// Requires `trainerName`, `pokemonType`, and `pokemonImgUrl`, checked
/// in that order (the first missing field wins the 400). The owner's
/// `poke_count` increment and the insert commit together or not at
/// all; a failed catch for an unknown trainer mutates nothing.
pub async fn catch_pokemon(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CatchPokemonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require(body.trainer_name, "trainerName")?;
    let pokemon_type = require(body.pokemon_type, "pokemonType")?;
    let image_url = require(body.pokemon_img_url, "pokemonImgUrl")?;

    let trainer_id = resolve_trainer(&state, &name).await?;
    let pokemon = state
        .pokemon()
        .catch(trainer_id, &pokemon_type, &image_url)
        .await?;
    Ok(Json(pokemon))
}

// ---------------------------------------------------------------------------
// PATCH /pokemon -- level up a pokemon
// ---------------------------------------------------------------------------

/// Increment a pokemon's level by one, returning the updated row.
///
/// Requires `trainerName` and `pokemonType`. Resolution failures map
/// to 400 `Trainer Not Found` / `Pokemon Not Found` respectively.
pub async fn level_up_pokemon(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PokemonByTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require(body.trainer_name, "trainerName")?;
    let pokemon_type = require(body.pokemon_type, "pokemonType")?;

    let trainer_id = resolve_trainer(&state, &name).await?;
    let pokemon_id = resolve_pokemon(&state, trainer_id, &pokemon_type).await?;
    let pokemon = state.pokemon().level_up(pokemon_id).await?;
    Ok(Json(pokemon))
}

// ---------------------------------------------------------------------------
// DELETE /pokemon -- release a pokemon
// ---------------------------------------------------------------------------

/// Release a pokemon, returning the deleted row.
///
/// Requires `trainerName` and `pokemonType`. The owner's `poke_count`
/// decrement and the delete commit together or not at all.
pub async fn release_pokemon(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PokemonByTypeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require(body.trainer_name, "trainerName")?;
    let pokemon_type = require(body.pokemon_type, "pokemonType")?;

    let trainer_id = resolve_trainer(&state, &name).await?;
    let pokemon_id = resolve_pokemon(&state, trainer_id, &pokemon_type).await?;
    let pokemon = state.pokemon().release(trainer_id, pokemon_id).await?;
    Ok(Json(pokemon))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a pokemon ID by its owner and type, failing with 400
/// `Pokemon Not Found` when the pair does not resolve.
async fn resolve_pokemon(
    state: &AppState,
    trainer_id: TrainerId,
    pokemon_type: &str,
) -> Result<PokemonId, ApiError> {
    state
        .pokemon()
        .find_id_by_type(trainer_id, pokemon_type)
        .await?
        .ok_or(ApiError::PokemonNotFound)
}
