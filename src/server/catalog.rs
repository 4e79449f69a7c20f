//! Read-only passthrough client for the upstream show catalog.
//!
//! Responses are relayed to callers verbatim as JSON values; this client
//! never touches the entity store. Network failures are surfaced as
//! transport errors without retries or an explicit timeout policy.

use serde_json::Value;

use crate::server::error::catalog::CatalogError;

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a catalog client rooted at the given base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the full character listing from the upstream catalog
    pub async fn characters(&self) -> Result<Value, CatalogError> {
        self.fetch("/characters").await
    }

    /// Fetches a single character; an empty upstream body means the
    /// character does not exist
    pub async fn character(&self, character_id: i64) -> Result<Value, CatalogError> {
        let payload = self.fetch(&format!("/characters/{character_id}")).await?;

        if is_empty_payload(&payload) {
            return Err(CatalogError::CharacterNotFound(character_id));
        }

        Ok(payload)
    }

    /// Fetches the full location listing from the upstream catalog
    pub async fn locations(&self) -> Result<Value, CatalogError> {
        self.fetch("/locations").await
    }

    /// Fetches a single location; an empty upstream body means the
    /// location does not exist
    pub async fn location(&self, location_id: i64) -> Result<Value, CatalogError> {
        let payload = self.fetch(&format!("/locations/{location_id}")).await?;

        if is_empty_payload(&payload) {
            return Err(CatalogError::LocationNotFound(location_id));
        }

        Ok(payload)
    }

    async fn fetch(&self, path: &str) -> Result<Value, CatalogError> {
        let url = format!("{}{}", self.base_url, path);

        let payload = self.http.get(&url).send().await?.json::<Value>().await?;

        Ok(payload)
    }
}

/// The upstream signals an unknown ID with an empty or falsy body rather
/// than a 404 status
fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
