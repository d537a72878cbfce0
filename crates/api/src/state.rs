use std::sync::Arc;

use herhealth_core::store::UserStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything sits behind an `Arc`. The store is built once
/// in `main` and injected here; handlers never reach for a global connection.
#[derive(Clone)]
pub struct AppState {
    /// User store collaborator (Postgres in production, in-memory in tests).
    pub store: Arc<dyn UserStore>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
