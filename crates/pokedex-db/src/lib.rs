//! Data layer for the Pokedex API (`PostgreSQL`).
//!
//! `PostgreSQL` holds the two tables this service manages: `trainers`
//! and `pokemon`. This crate provides the connection pool and the typed
//! store operations the HTTP handlers orchestrate.
//!
//! # Architecture
//!
//! ```text
//! HTTP handler
//!     |
//!     +-- TrainerStore  (list / insert / resolve / rename / retire)
//!     |
//!     +-- PokemonStore  (list / resolve / catch / level up / release)
//!         |
//!         +-- PostgresPool (bounded sqlx connection pool)
//! ```
//!
//! Composite mutations that touch both tables (catching a pokemon bumps
//! the owner's `poke_count`; retiring a trainer removes its pokemon) run
//! inside a single transaction so the counter can never drift from the
//! actual row count.
//!
//! # Modules
//!
//! - [`postgres`] -- `PostgreSQL` connection pool and configuration
//! - [`ids`] -- Type-safe UUID wrappers for trainers and pokemon
//! - [`trainer_store`] -- Operations on the `trainers` table
//! - [`pokemon_store`] -- Operations on the `pokemon` table
//! - [`error`] -- Shared error types

pub mod error;
pub mod ids;
pub mod pokemon_store;
pub mod postgres;
pub mod trainer_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use ids::{PokemonId, TrainerId};
pub use pokemon_store::{Pokemon, PokemonStore};
pub use postgres::{PostgresConfig, PostgresPool};
pub use trainer_store::{Trainer, TrainerStore};
