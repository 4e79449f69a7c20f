use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failure modes of the favorites service.
///
/// Add and remove fail loudly rather than succeeding silently: a duplicate
/// add is a client error (409) and removing a pair that was never
/// favorited is a 404. That contract is deliberate and load-bearing.
#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    #[error("Character ID {0:?} not found")]
    CharacterNotFound(i32),
    #[error("Location ID {0:?} not found")]
    LocationNotFound(i32),
    #[error("Pair is already present in the favorite set")]
    AlreadyFavorite,
    #[error("Pair is not present in the favorite set")]
    NotAFavorite,
}

impl FavoriteError {
    fn not_found(message: &str) -> Response {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::not_found("User not found")
            }
            Self::CharacterNotFound(character_id) => {
                tracing::debug!(character_id = %character_id, "{}", self);

                Self::not_found("Character not found")
            }
            Self::LocationNotFound(location_id) => {
                tracing::debug!(location_id = %location_id, "{}", self);

                Self::not_found("Location not found")
            }
            Self::AlreadyFavorite => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Already favorite".to_string(),
                }),
            )
                .into_response(),
            Self::NotAFavorite => Self::not_found("Not a favorite"),
        }
    }
}
