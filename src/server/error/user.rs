use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User ID {0:?} not found")]
    NotFound(i32),
    #[error("Missing required field {0:?} when creating user")]
    MissingField(&'static str),
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::MissingField(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Email and password are required".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Email is already registered".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
