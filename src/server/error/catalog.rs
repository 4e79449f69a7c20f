use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Upstream catalog returned an empty body for character ID {0:?}")]
    CharacterNotFound(i64),
    #[error("Upstream catalog returned an empty body for location ID {0:?}")]
    LocationNotFound(i64),
    /// Transport failures carry no retry or timeout policy; they surface
    /// directly as internal errors.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl CatalogError {
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

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::CharacterNotFound(character_id) => {
                tracing::debug!(character_id = %character_id, "{}", self);

                Self::not_found("Character not found")
            }
            Self::LocationNotFound(location_id) => {
                tracing::debug!(location_id = %location_id, "{}", self);

                Self::not_found("Location not found")
            }
            Self::Transport(err) => InternalServerError(err).into_response(),
        }
    }
}
