use std::sync::Arc;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`. Clones share the pool
/// and the settings.
#[derive(Clone)]
pub struct AppState {
    pub pool: logistica_db::DbPool,
    /// Read by the token extractor and the login handler.
    pub config: Arc<ServerConfig>,
}
