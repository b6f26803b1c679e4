//! Operations on the `pokemon` table.
//!
//! A pokemon belongs to exactly one trainer. The `(trainer_id,
//! pokemon_type)` pair is the lookup key the API uses for mutations;
//! handlers assume at most one pokemon per trainer and type.
//!
//! Catching and releasing a pokemon also adjust the owner's
//! `poke_count`. Both statements run in one transaction so the counter
//! and the row set cannot drift apart on partial failure. The
//! increment happens inside the UPDATE statement itself, so concurrent
//! catches for the same trainer serialize in the database rather than
//! racing read-modify-write in the application.

use sqlx::PgPool;

use crate::error::DbError;
use crate::ids::{PokemonId, TrainerId};

/// A row from the `pokemon` table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, sqlx::FromRow)]
pub struct Pokemon {
    /// Unique identifier, generated at creation.
    pub pokemon_id: PokemonId,
    /// The owning trainer.
    pub trainer_id: TrainerId,
    /// Type classification (e.g. `pikachu`); the lookup key within a
    /// trainer's pokemon.
    pub pokemon_type: String,
    /// Image URL, stored at creation and immutable thereafter.
    pub pokemon_image_url: String,
    /// Level counter, schema-defaulted to 1.
    pub pokemon_level: i32,
}

/// Operations on the `pokemon` table.
pub struct PokemonStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PokemonStore<'a> {
    /// Create a new pokemon store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all pokemon across all trainers.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Pokemon>, DbError> {
        let rows = sqlx::query_as::<_, Pokemon>(
            r"SELECT pokemon_id, trainer_id, pokemon_type, pokemon_image_url, pokemon_level
              FROM pokemon
              ORDER BY pokemon_id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// List the pokemon owned by one trainer.
    ///
    /// The filter is a bound parameter, never interpolated SQL text.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list_for_trainer(&self, trainer_id: TrainerId) -> Result<Vec<Pokemon>, DbError> {
        let rows = sqlx::query_as::<_, Pokemon>(
            r"SELECT pokemon_id, trainer_id, pokemon_type, pokemon_image_url, pokemon_level
              FROM pokemon
              WHERE trainer_id = $1
              ORDER BY pokemon_id",
        )
        .bind(trainer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Resolve a pokemon's ID by its owner and type.
    ///
    /// Returns `None` when the trainer has no pokemon of that type.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails, including
    /// when more than one row matches the pair.
    pub async fn find_id_by_type(
        &self,
        trainer_id: TrainerId,
        pokemon_type: &str,
    ) -> Result<Option<PokemonId>, DbError> {
        let id = sqlx::query_scalar::<_, PokemonId>(
            "SELECT pokemon_id FROM pokemon WHERE trainer_id = $1 AND pokemon_type = $2",
        )
        .bind(trainer_id)
        .bind(pokemon_type)
        .fetch_optional(self.pool)
        .await?;

        Ok(id)
    }

    /// Catch a pokemon for a trainer: increment the trainer's
    /// `poke_count` and insert the new row, in one transaction.
    ///
    /// The level is defaulted by the schema. Returns the created row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if either statement fails; on
    /// failure the transaction rolls back, leaving the counter and the
    /// row set untouched.
    pub async fn catch(
        &self,
        trainer_id: TrainerId,
        pokemon_type: &str,
        image_url: &str,
    ) -> Result<Pokemon, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE trainers SET poke_count = poke_count + 1 WHERE trainer_id = $1")
            .bind(trainer_id)
            .execute(&mut *tx)
            .await?;

        let id = PokemonId::new();
        let row = sqlx::query_as::<_, Pokemon>(
            r"INSERT INTO pokemon (pokemon_id, trainer_id, pokemon_type, pokemon_image_url)
              VALUES ($1, $2, $3, $4)
              RETURNING pokemon_id, trainer_id, pokemon_type, pokemon_image_url, pokemon_level",
        )
        .bind(id)
        .bind(trainer_id)
        .bind(pokemon_type)
        .bind(image_url)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(pokemon_id = %id, trainer_id = %trainer_id, pokemon_type, "Caught pokemon");
        Ok(row)
    }

    /// Increment a pokemon's level by one, returning the updated row.
    ///
    /// All other fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails or no row
    /// matches the ID.
    pub async fn level_up(&self, id: PokemonId) -> Result<Pokemon, DbError> {
        let row = sqlx::query_as::<_, Pokemon>(
            r"UPDATE pokemon SET pokemon_level = pokemon_level + 1
              WHERE pokemon_id = $1
              RETURNING pokemon_id, trainer_id, pokemon_type, pokemon_image_url, pokemon_level",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Release a pokemon: decrement the owner's `poke_count` and
    /// delete the row, in one transaction. Returns the deleted row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if either statement fails; on
    /// failure the transaction rolls back, leaving the counter and the
    /// row set untouched.
    pub async fn release(
        &self,
        trainer_id: TrainerId,
        id: PokemonId,
    ) -> Result<Pokemon, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE trainers SET poke_count = poke_count - 1 WHERE trainer_id = $1")
            .bind(trainer_id)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, Pokemon>(
            r"DELETE FROM pokemon WHERE pokemon_id = $1
              RETURNING pokemon_id, trainer_id, pokemon_type, pokemon_image_url, pokemon_level",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(pokemon_id = %id, trainer_id = %trainer_id, "Released pokemon");
        Ok(row)
    }
}
