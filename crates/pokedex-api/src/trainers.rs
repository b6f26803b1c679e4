//! Request handlers for the `/trainer` routes.
//!
//! Each handler validates its body fields first (absent or empty
//! fields fail with a 400 naming the field), resolves the trainer by
//! name where needed, then performs the store operation and returns
//! the affected row as JSON.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use pokedex_db::TrainerId;

use crate::error::{ApiError, require};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request body structs
// ---------------------------------------------------------------------------

/// Request body for `POST /trainer`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrainerRequest {
    /// The new trainer's name. Stored lowercase.
    pub trainer_name: Option<String>,
}

/// Request body for `PATCH /trainer`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameTrainerRequest {
    /// The current trainer name.
    pub trainer_name: Option<String>,
    /// The replacement name. Stored lowercase.
    pub new_name: Option<String>,
}

/// Request body for `DELETE /trainer`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetireTrainerRequest {
    /// The trainer to retire.
    pub trainer_name: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /trainer -- list all trainers
// ---------------------------------------------------------------------------

/// Return every trainer row, unfiltered.
pub async fn list_trainers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let trainers = state.trainers().list().await?;
    Ok(Json(trainers))
}

// ---------------------------------------------------------------------------
// POST /trainer -- create a trainer
// ---------------------------------------------------------------------------

/// Create a trainer with a fresh ID and a zero pokemon count.
///
/// Requires `trainerName`. The name is stored lowercase; the created
/// row is returned.
pub async fn create_trainer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTrainerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require(body.trainer_name, "trainerName")?;
    let trainer = state.trainers().insert(&name).await?;
    Ok(Json(trainer))
}

// ---------------------------------------------------------------------------
// PATCH /trainer -- rename a trainer
// ---------------------------------------------------------------------------

/// Rename a trainer, returning the updated row.
///
/// Requires `trainerName` and `newName`, each independently checked.
/// An unknown current name fails with 400 `Trainer Not Found`.
pub async fn rename_trainer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RenameTrainerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require(body.trainer_name, "trainerName")?;
    let new_name = require(body.new_name, "newName")?;

    let id = resolve_trainer(&state, &name).await?;
    let trainer = state.trainers().rename(id, &new_name).await?;
    Ok(Json(trainer))
}

// ---------------------------------------------------------------------------
// DELETE /trainer -- retire a trainer
// ---------------------------------------------------------------------------

/// Retire a trainer and release all of its pokemon, returning the
/// deleted trainer row.
///
/// The cascade and the trainer delete run in one transaction in the
/// data layer.
pub async fn retire_trainer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RetireTrainerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = require(body.trainer_name, "trainerName")?;

    let id = resolve_trainer(&state, &name).await?;
    let trainer = state.trainers().retire(id).await?;
    Ok(Json(trainer))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a trainer ID by name, failing with 400 `Trainer Not Found`
/// when the name does not resolve.
pub(crate) async fn resolve_trainer(state: &AppState, name: &str) -> Result<TrainerId, ApiError> {
    state
        .trainers()
        .find_id_by_name(name)
        .await?
        .ok_or(ApiError::TrainerNotFound)
}
