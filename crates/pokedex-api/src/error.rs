//! Error types for the Pokedex API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can
//! be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//!
//! The status mapping follows the API contract: missing body fields
//! and unresolved entities both map to 400 (the latter with an
//! entity-specific message), and any data-layer failure maps to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pokedex_db::DbError;

/// Errors that can occur while handling an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required body field was absent or empty.
    #[error("Must Provide {0}")]
    MissingField(&'static str),

    /// The referenced trainer name did not resolve.
    #[error("Trainer Not Found")]
    TrainerNotFound,

    /// The referenced trainer has no pokemon of the requested type.
    #[error("Pokemon Not Found")]
    PokemonNotFound,

    /// A data-layer operation failed.
    #[error("Database Error: {0}")]
    Db(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingField(_) | Self::TrainerNotFound | Self::PokemonNotFound => {
                StatusCode::BAD_REQUEST
            }
            Self::Db(e) => {
                tracing::error!(error = %e, "Store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Extract a required body field.
///
/// An absent or empty value fails with [`ApiError::MissingField`],
/// which carries the field's wire name for the 400 message.
pub(crate) fn require(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_accepts_non_empty_values() {
        assert_eq!(
            require(Some(String::from("ash")), "trainerName").ok(),
            Some(String::from("ash"))
        );
    }

    #[test]
    fn require_rejects_absent_and_empty_values() {
        assert!(matches!(
            require(None, "trainerName"),
            Err(ApiError::MissingField("trainerName"))
        ));
        assert!(matches!(
            require(Some(String::new()), "pokemonType"),
            Err(ApiError::MissingField("pokemonType"))
        ));
    }

    #[test]
    fn missing_field_message_names_the_field() {
        let err = ApiError::MissingField("pokemonImgUrl");
        assert_eq!(err.to_string(), "Must Provide pokemonImgUrl");
    }

    #[test]
    fn not_found_messages_match_the_contract() {
        assert_eq!(ApiError::TrainerNotFound.to_string(), "Trainer Not Found");
        assert_eq!(ApiError::PokemonNotFound.to_string(), "Pokemon Not Found");
    }
}
