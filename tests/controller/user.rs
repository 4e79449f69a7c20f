//! Tests for the user account endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use springfield::{
    model::user::CreateUserDto,
    server::controller::user::{create_user, get_user, get_user_favorites, get_users},
};
use springfield_test_utils::prelude::*;

use super::{app_state, response_json};

/// Expect 201 with the new user's ID and email, and no password field
#[tokio::test]
async fn create_returns_created_user_without_password() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;

    let result = create_user(
        State(app_state(&test)),
        Json(CreateUserDto {
            email: Some("homer@springfield.test".to_string()),
            password: Some("donuts".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = response_json(resp).await?;
    assert_eq!(body["email"], "homer@springfield.test");
    assert!(body["id"].is_number());
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 400 when the request body omits the password
#[tokio::test]
async fn create_rejects_missing_password() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;

    let result = create_user(
        State(app_state(&test)),
        Json(CreateUserDto {
            email: Some("homer@springfield.test".to_string()),
            password: None,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Email and password are required");

    Ok(())
}

/// Expect 409 when registering an email that is already taken
#[tokio::test]
async fn create_rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    store::insert_user(&test.db, "homer@springfield.test").await?;

    let result = create_user(
        State(app_state(&test)),
        Json(CreateUserDto {
            email: Some("homer@springfield.test".to_string()),
            password: Some("donuts".to_string()),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Email is already registered");

    Ok(())
}

/// Expect 200 with every registered user
#[tokio::test]
async fn list_returns_all_users() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    store::insert_user(&test.db, "homer@springfield.test").await?;
    store::insert_user(&test.db, "marge@springfield.test").await?;

    let result = get_users(State(app_state(&test))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 200 with the requested user
#[tokio::test]
async fn get_returns_existing_user() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    let user_model = store::insert_user(&test.db, "homer@springfield.test").await?;

    let result = get_user(State(app_state(&test)), Path(user_model.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body["id"], user_model.id);
    assert_eq!(body["email"], "homer@springfield.test");

    Ok(())
}

/// Expect 404 for an unknown user ID
#[tokio::test]
async fn get_returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;

    let result = get_user(State(app_state(&test)), Path(999_999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

/// Expect 200 with both favorite sets resolved to mirrored rows
#[tokio::test]
async fn favorites_returns_both_sets() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;
    let user_model = store::insert_user(&test.db, "homer@springfield.test").await?;
    let moe = store::insert_character(&test.db, 5, "Moe Szyslak").await?;
    let tavern = store::insert_location(&test.db, 3, "Moe's Tavern").await?;
    store::insert_favorite_character(&test.db, user_model.id, moe.id).await?;
    store::insert_favorite_location(&test.db, user_model.id, tavern.id).await?;

    let result = get_user_favorites(State(app_state(&test)), Path(user_model.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await?;
    assert_eq!(body["characters"][0]["name"], "Moe Szyslak");
    assert_eq!(body["locations"][0]["name"], "Moe's Tavern");

    Ok(())
}

/// Expect 404 when fetching favorites for an unknown user
#[tokio::test]
async fn favorites_returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = test_setup_with_favorite_tables!()?;

    let result = get_user_favorites(State(app_state(&test)), Path(999_999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

/// Expect 500 when the store tables are missing
#[tokio::test]
async fn list_reports_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_users(State(app_state(&test))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(resp).await?;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}
