use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, show::CharacterDto},
    server::{data::character::CharacterRepository, error::Error, model::app::AppState},
};

pub static CHARACTER_TAG: &str = "character";

/// Get all characters mirrored in the store
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let characters = character_repository.get_all().await?;

    let character_dtos: Vec<CharacterDto> =
        characters.into_iter().map(CharacterDto::from).collect();

    Ok((StatusCode::OK, Json(character_dtos)).into_response())
}

/// Get one character by ID
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CHARACTER_TAG,
    params(
        ("character_id" = i32, Path, description = "ID of the character to fetch"),
    ),
    responses(
        (status = 200, description = "Success when fetching a character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_repository = CharacterRepository::new(&state.db);

    let character = if let Some(character) = character_repository.get(character_id).await? {
        character
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Character not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(CharacterDto::from(character))).into_response())
}
