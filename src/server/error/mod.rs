//! Error types for the Springfield server application.
//!
//! Domain errors (`UserError`, `FavoriteError`, `CatalogError`) use
//! `thiserror` and implement `IntoResponse`, so handlers can return them
//! directly and clients always receive a JSON `{"error": ...}` body with
//! the mapped status code. Anything without a specific mapping falls back
//! to a logged 500 via [`InternalServerError`].

pub mod catalog;
pub mod favorite;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, favorite::FavoriteError, user::UserError},
};

/// Main error type for the Springfield server application.
///
/// Aggregates the domain-specific error types and database errors into a
/// single unified type, using `thiserror`'s `#[from]` so handlers can
/// bubble everything up with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// User account error (missing field, unknown user, duplicate email).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Favorites error (unknown user/entity, duplicate or absent pair).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Upstream catalog error (empty body for an ID, transport failure).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::UserError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client to avoid exposing internal details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
