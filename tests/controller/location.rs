//! Tests for the mirrored location endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use springfield::server::controller::location::{get_location, get_locations};
use springfield_test_utils::prelude::*;

use super::{app_state, response_json};

/// Expect 200 with every mirrored location
#[tokio::test]
async fn list_returns_all_locations() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    store::insert_location(&test.db, 1, "Springfield Nuclear Power Plant").await?;
    store::insert_location(&test.db, 2, "Kwik-E-Mart").await?;

    let result = get_locations(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 200 with the requested location
#[tokio::test]
async fn get_returns_existing_location() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    let location_model = store::insert_location(&test.db, 3, "Moe's Tavern").await?;

    let result = get_location(State(app_state(&test)), Path(location_model.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body["id"], 3);
    assert_eq!(body["name"], "Moe's Tavern");

    Ok(())
}

/// Expect 404 for a location that is not mirrored
#[tokio::test]
async fn get_returns_not_found_for_unknown_location() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;

    let result = get_location(State(app_state(&test)), Path(999_999)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Location not found");

    Ok(())
}
