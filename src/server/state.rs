/**
 * Application State
 *
 * The state container shared by all handlers: the database pool and the
 * validated configuration. Both are cheap to clone (the pool is an Arc
 * internally, the config is wrapped in one), so axum clones the state
 * per request without cost.
 *
 * The `FromRef` implementations let handlers extract just the part they
 * need: `State<PgPool>` for store access, `State<AppState>` where the
 * configuration is also required.
 */

use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::server::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Validated process configuration
    pub config: Arc<AppConfig>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
