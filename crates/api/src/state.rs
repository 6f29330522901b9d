use std::sync::Arc;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clubsite_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Externally-owned session store; the admin workflow depends only on
    /// this interface.
    pub sessions: Arc<dyn SessionStore>,
    /// Compiled view templates.
    pub views: Arc<minijinja::Environment<'static>>,
}
