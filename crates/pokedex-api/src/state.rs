//! Shared application state for the Pokedex API server.
//!
//! [`AppState`] holds the explicitly constructed database pool and is
//! injected into handlers via Axum's `State` extractor. There is no
//! process-global connection; the pool is built once at startup and
//! every store call acquires and releases a pooled connection through
//! it.

use pokedex_db::{PokemonStore, PostgresPool, TrainerStore};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and cloned per request by Axum.
#[derive(Clone)]
pub struct AppState {
    db: PostgresPool,
}

impl AppState {
    /// Create application state around a connected pool.
    pub const fn new(db: PostgresPool) -> Self {
        Self { db }
    }

    /// A trainer store bound to this state's pool.
    pub const fn trainers(&self) -> TrainerStore<'_> {
        TrainerStore::new(self.db.pool())
    }

    /// A pokemon store bound to this state's pool.
    pub const fn pokemon(&self) -> PokemonStore<'_> {
        PokemonStore::new(self.db.pool())
    }

    /// The underlying pool handle.
    pub const fn db(&self) -> &PostgresPool {
        &self.db
    }
}
