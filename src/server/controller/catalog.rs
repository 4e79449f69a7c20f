use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState},
};

pub static UPSTREAM_TAG: &str = "upstream";

/// Relay the upstream character listing
#[utoipa::path(
    get,
    path = "/upstream/characters",
    tag = UPSTREAM_TAG,
    responses(
        (status = 200, description = "Upstream character listing relayed verbatim", body = Value),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upstream_characters(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let payload = state.catalog.characters().await?;

    Ok((StatusCode::OK, Json(payload)).into_response())
}

/// Relay one upstream character
#[utoipa::path(
    get,
    path = "/upstream/characters/{character_id}",
    tag = UPSTREAM_TAG,
    params(
        ("character_id" = i64, Path, description = "Upstream ID of the character"),
    ),
    responses(
        (status = 200, description = "Upstream character relayed verbatim", body = Value),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upstream_character(
    State(state): State<AppState>,
    Path(character_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let payload = state.catalog.character(character_id).await?;

    Ok((StatusCode::OK, Json(payload)).into_response())
}

/// Relay the upstream location listing
#[utoipa::path(
    get,
    path = "/upstream/locations",
    tag = UPSTREAM_TAG,
    responses(
        (status = 200, description = "Upstream location listing relayed verbatim", body = Value),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upstream_locations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let payload = state.catalog.locations().await?;

    Ok((StatusCode::OK, Json(payload)).into_response())
}

/// Relay one upstream location
#[utoipa::path(
    get,
    path = "/upstream/locations/{location_id}",
    tag = UPSTREAM_TAG,
    params(
        ("location_id" = i64, Path, description = "Upstream ID of the location"),
    ),
    responses(
        (status = 200, description = "Upstream location relayed verbatim", body = Value),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upstream_location(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    let payload = state.catalog.location(location_id).await?;

    Ok((StatusCode::OK, Json(payload)).into_response())
}
