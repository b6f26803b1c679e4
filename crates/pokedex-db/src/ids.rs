//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Trainers and pokemon each get a strongly-typed ID to prevent
//! accidental mixing of identifiers at compile time. IDs use UUID v7
//! (time-ordered) for efficient database indexing and are generated
//! app-side at insert time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
///
/// The `sqlx::Type` transparent derive lets rows decode the wrapper
/// directly from `UUID` columns without manual conversion.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, sqlx::Type,
        )]
        #[sqlx(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a trainer.
    TrainerId
}

define_id! {
    /// Unique identifier for a pokemon.
    PokemonId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = TrainerId::new();
        let b = TrainerId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn id_display_matches_inner_uuid() {
        let id = PokemonId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn id_round_trips_through_uuid() {
        let id = TrainerId::new();
        let uuid: Uuid = id.into();
        assert_eq!(TrainerId::from(uuid), id);
    }
}
