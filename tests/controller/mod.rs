//! Integration tests for the HTTP controller endpoints.
//!
//! Handlers are invoked directly with axum extractors over an in-memory
//! store and a mocked upstream catalog, verifying status codes and
//! response bodies for each route family.

mod catalog;
mod location;
mod user;

use springfield::server::{catalog::Client, model::app::AppState};
use springfield_test_utils::TestSetup;

/// Builds application state pointed at the test's store and mock catalog
pub(crate) fn app_state(test: &TestSetup) -> AppState {
    AppState::from((test.db.clone(), Client::new(&test.catalog_url())))
}

/// Deserializes a handler response body, consuming the response
pub(crate) async fn response_json(
    response: axum::response::Response,
) -> Result<serde_json::Value, springfield_test_utils::TestError> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    Ok(serde_json::from_slice(&bytes)?)
}
