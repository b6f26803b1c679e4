//! HTTP API server for the Pokedex service.
//!
//! This crate provides an Axum HTTP server exposing a JSON CRUD API
//! over the trainer and pokemon registry in `PostgreSQL`:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/trainer` | List all trainers |
//! | `POST` | `/trainer` | Create a trainer |
//! | `PATCH` | `/trainer` | Rename a trainer |
//! | `DELETE` | `/trainer` | Retire a trainer (cascades to pokemon) |
//! | `GET` | `/pokemon` | List all pokemon |
//! | `GET` | `/pokemon/{trainerName}` | List one trainer's pokemon |
//! | `POST` | `/pokemon` | Catch a pokemon for a trainer |
//! | `PATCH` | `/pokemon` | Level up a pokemon |
//! | `DELETE` | `/pokemon` | Release a pokemon |
//!
//! # Architecture
//!
//! Each handler validates its body fields, resolves referenced
//! entities by name, and orchestrates a short sequence of store calls
//! against the shared [`AppState`] pool. Composite mutations are
//! transactional in the data layer. Validation and resolution failures
//! become 400 responses; store failures become 500 responses; nothing
//! panics the process.
//!
//! [`AppState`]: state::AppState

pub mod config;
pub mod error;
pub mod pokemon;
pub mod router;
pub mod server;
pub mod state;
pub mod trainers;

// Re-export primary types for convenience.
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
