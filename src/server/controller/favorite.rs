use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{CharacterFavoriteDto, LocationFavoriteDto},
    },
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a character to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character to favorite"),
    ),
    responses(
        (status = 201, description = "Character added to favorites", body = CharacterFavoriteDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 409, description = "Already favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_character_favorite(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.add_character(user_id, character_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CharacterFavoriteDto {
            message: "Character added to favorites".to_string(),
            user_id,
            character_id,
        }),
    )
        .into_response())
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/character/{character_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("character_id" = i32, Path, description = "ID of the character to unfavorite"),
    ),
    responses(
        (status = 200, description = "Character removed from favorites", body = CharacterFavoriteDto),
        (status = 404, description = "User or character not found, or not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_character_favorite(
    State(state): State<AppState>,
    Path((user_id, character_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_character(user_id, character_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CharacterFavoriteDto {
            message: "Character removed from favorites".to_string(),
            user_id,
            character_id,
        }),
    )
        .into_response())
}

/// Add a location to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/location/{location_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("location_id" = i32, Path, description = "ID of the location to favorite"),
    ),
    responses(
        (status = 201, description = "Location added to favorites", body = LocationFavoriteDto),
        (status = 404, description = "User or location not found", body = ErrorDto),
        (status = 409, description = "Already favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_location_favorite(
    State(state): State<AppState>,
    Path((user_id, location_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service.add_location(user_id, location_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(LocationFavoriteDto {
            message: "Location added to favorites".to_string(),
            user_id,
            location_id,
        }),
    )
        .into_response())
}

/// Remove a location from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/location/{location_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("location_id" = i32, Path, description = "ID of the location to unfavorite"),
    ),
    responses(
        (status = 200, description = "Location removed from favorites", body = LocationFavoriteDto),
        (status = 404, description = "User or location not found, or not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_location_favorite(
    State(state): State<AppState>,
    Path((user_id, location_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db);

    favorite_service
        .remove_location(user_id, location_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(LocationFavoriteDto {
            message: "Location removed from favorites".to_string(),
            user_id,
            location_id,
        }),
    )
        .into_response())
}
