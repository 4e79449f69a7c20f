use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

/// Mock a catalog endpoint returning the given JSON payload
pub fn mock_catalog_endpoint(
    server: &mut ServerGuard,
    path: &str,
    payload: &Value,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(payload.to_string())
        .expect(expected_requests)
        .create()
}

/// Payload shaped like a single upstream catalog character
pub fn mock_character_payload(character_id: i64, name: &str) -> Value {
    json!({
        "id": character_id,
        "name": name,
        "occupation": "Safety Inspector",
        "status": "Alive",
    })
}

/// Payload shaped like a single upstream catalog location
pub fn mock_location_payload(location_id: i64, name: &str) -> Value {
    json!({
        "id": location_id,
        "name": name,
        "town": "Springfield",
    })
}

/// Payload shaped like an upstream catalog list response
pub fn mock_list_payload(items: Vec<Value>) -> Value {
    json!({
        "count": items.len(),
        "results": items,
    })
}
