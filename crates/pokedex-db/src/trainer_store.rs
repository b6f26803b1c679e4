//! Operations on the `trainers` table.
//!
//! Trainer names are unique and stored lowercase. Every method that
//! takes a name normalizes it first, so callers may pass user input
//! in any casing. Retiring a trainer removes its pokemon in the same
//! transaction to satisfy the foreign-key constraint and keep the
//! delete atomic.

use sqlx::PgPool;

use crate::error::DbError;
use crate::ids::TrainerId;

/// A row from the `trainers` table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, sqlx::FromRow)]
pub struct Trainer {
    /// Unique identifier, generated at creation.
    pub trainer_id: TrainerId,
    /// Unique name, stored lowercase.
    pub trainer_name: String,
    /// Number of pokemon owned by this trainer.
    ///
    /// Maintained by [`PokemonStore`](crate::pokemon_store::PokemonStore)
    /// inside the same transaction as the pokemon insert/delete, so it
    /// always equals the number of owned rows.
    pub poke_count: i32,
}

/// Normalize a trainer name to its stored (lowercase) form.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

/// Operations on the `trainers` table.
pub struct TrainerStore<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainerStore<'a> {
    /// Create a new trainer store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all trainers.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Trainer>, DbError> {
        let rows = sqlx::query_as::<_, Trainer>(
            r"SELECT trainer_id, trainer_name, poke_count
              FROM trainers
              ORDER BY trainer_name",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Insert a new trainer with a fresh ID and a zero pokemon count.
    ///
    /// The name is lowercased before insert. Returns the created row.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails, including on
    /// a unique-name violation.
    pub async fn insert(&self, name: &str) -> Result<Trainer, DbError> {
        let id = TrainerId::new();
        let row = sqlx::query_as::<_, Trainer>(
            r"INSERT INTO trainers (trainer_id, trainer_name)
              VALUES ($1, $2)
              RETURNING trainer_id, trainer_name, poke_count",
        )
        .bind(id)
        .bind(normalize_name(name))
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(trainer_id = %row.trainer_id, name = %row.trainer_name, "Inserted trainer");
        Ok(row)
    }

    /// Resolve a trainer's ID by name (lowercased before lookup).
    ///
    /// Returns `None` when no trainer has that name.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn find_id_by_name(&self, name: &str) -> Result<Option<TrainerId>, DbError> {
        let id = sqlx::query_scalar::<_, TrainerId>(
            "SELECT trainer_id FROM trainers WHERE trainer_name = $1",
        )
        .bind(normalize_name(name))
        .fetch_optional(self.pool)
        .await?;

        Ok(id)
    }

    /// Rename a trainer, returning the updated row.
    ///
    /// The new name is lowercased before update.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the update fails or no row
    /// matches the ID.
    pub async fn rename(&self, id: TrainerId, new_name: &str) -> Result<Trainer, DbError> {
        let row = sqlx::query_as::<_, Trainer>(
            r"UPDATE trainers SET trainer_name = $1
              WHERE trainer_id = $2
              RETURNING trainer_id, trainer_name, poke_count",
        )
        .bind(normalize_name(new_name))
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Retire a trainer: delete all owned pokemon, then the trainer
    /// row, in one transaction. Returns the deleted trainer row.
    ///
    /// The pokemon deletes must precede the trainer delete to satisfy
    /// the foreign-key constraint.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if either delete fails; on
    /// failure the transaction rolls back and nothing is removed.
    pub async fn retire(&self, id: TrainerId) -> Result<Trainer, DbError> {
        let mut tx = self.pool.begin().await?;

        let released = sqlx::query("DELETE FROM pokemon WHERE trainer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let row = sqlx::query_as::<_, Trainer>(
            r"DELETE FROM trainers WHERE trainer_id = $1
              RETURNING trainer_id, trainer_name, poke_count",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(trainer_id = %id, pokemon_released = released, "Retired trainer");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize_name("Ash"), "ash");
        assert_eq!(normalize_name("MISTY"), "misty");
    }

    #[test]
    fn normalize_leaves_lowercase_unchanged() {
        assert_eq!(normalize_name("brock"), "brock");
    }
}
