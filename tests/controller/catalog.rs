//! Tests for the upstream catalog passthrough endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use springfield::server::controller::catalog::{
    get_upstream_character, get_upstream_characters, get_upstream_location,
    get_upstream_locations,
};
use springfield_test_utils::prelude::*;

use super::{app_state, response_json};

/// Expect 200 with the upstream listing relayed verbatim
#[tokio::test]
async fn characters_relays_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let payload = catalog::mock_list_payload(vec![
        catalog::mock_character_payload(1, "Homer Simpson"),
        catalog::mock_character_payload(2, "Marge Simpson"),
    ]);
    let mock = catalog::mock_catalog_endpoint(&mut test.server, "/characters", &payload, 1);

    let result = get_upstream_characters(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response_json(resp).await?, payload);
    mock.assert();

    Ok(())
}

/// Expect 200 with a single upstream character relayed verbatim
#[tokio::test]
async fn character_relays_payload() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let payload = catalog::mock_character_payload(5, "Moe Szyslak");
    let mock = catalog::mock_catalog_endpoint(&mut test.server, "/characters/5", &payload, 1);

    let result = get_upstream_character(State(app_state(&test)), Path(5)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response_json(resp).await?, payload);
    mock.assert();

    Ok(())
}

/// Expect 404 when the upstream answers with an empty body
#[tokio::test]
async fn character_reports_not_found_for_empty_body() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let payload = serde_json::json!({});
    let _mock = catalog::mock_catalog_endpoint(&mut test.server, "/characters/404", &payload, 1);

    let result = get_upstream_character(State(app_state(&test)), Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Character not found");

    Ok(())
}

/// Expect 200 with the upstream location listing relayed verbatim
#[tokio::test]
async fn locations_relays_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let payload = catalog::mock_list_payload(vec![catalog::mock_location_payload(
        3,
        "Moe's Tavern",
    )]);
    let mock = catalog::mock_catalog_endpoint(&mut test.server, "/locations", &payload, 1);

    let result = get_upstream_locations(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(response_json(resp).await?, payload);
    mock.assert();

    Ok(())
}

/// Expect 404 when the upstream answers with a null body
#[tokio::test]
async fn location_reports_not_found_for_null_body() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;

    let payload = serde_json::Value::Null;
    let _mock = catalog::mock_catalog_endpoint(&mut test.server, "/locations/404", &payload, 1);

    let result = get_upstream_location(State(app_state(&test)), Path(404)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Location not found");

    Ok(())
}

/// Expect 500 when the upstream is unreachable
#[tokio::test]
async fn character_reports_internal_error_for_transport_failure() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    // Point the client at a port nothing listens on
    let state = springfield::server::model::app::AppState::from((
        test.db.clone(),
        springfield::server::catalog::Client::new("http://127.0.0.1:9"),
    ));

    let result = get_upstream_character(State(state), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
