use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, show::LocationDto},
    server::{data::location::LocationRepository, error::Error, model::app::AppState},
};

pub static LOCATION_TAG: &str = "location";

/// Get all locations mirrored in the store
#[utoipa::path(
    get,
    path = "/locations",
    tag = LOCATION_TAG,
    responses(
        (status = 200, description = "Success when listing locations", body = Vec<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let location_repository = LocationRepository::new(&state.db);

    let locations = location_repository.get_all().await?;

    let location_dtos: Vec<LocationDto> = locations.into_iter().map(LocationDto::from).collect();

    Ok((StatusCode::OK, Json(location_dtos)).into_response())
}

/// Get one location by ID
#[utoipa::path(
    get,
    path = "/locations/{location_id}",
    tag = LOCATION_TAG,
    params(
        ("location_id" = i32, Path, description = "ID of the location to fetch"),
    ),
    responses(
        (status = 200, description = "Success when fetching a location", body = LocationDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(location_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let location_repository = LocationRepository::new(&state.db);

    let location = if let Some(location) = location_repository.get(location_id).await? {
        location
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: "Location not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, Json(LocationDto::from(location))).into_response())
}
