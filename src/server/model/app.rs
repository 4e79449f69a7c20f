use sea_orm::DatabaseConnection;

use crate::server::catalog;

/// Shared application state injected into every request handler.
///
/// Constructed once at startup; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: catalog::Client,
}

impl From<(DatabaseConnection, catalog::Client)> for AppState {
    fn from((db, catalog): (DatabaseConnection, catalog::Client)) -> Self {
        Self { db, catalog }
    }
}
