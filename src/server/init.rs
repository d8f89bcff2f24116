/**
 * Server Initialization
 *
 * Builds the application from validated configuration: connect the pool,
 * run migrations, assemble the state and the router. Startup fails fast
 * on an unreachable database; there is no degraded mode.
 */

use axum::Router;
use std::sync::Arc;

use crate::routes::router::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the application
///
/// # Errors
///
/// Returns the underlying store error when the database is unreachable
/// or a migration fails.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing PromptGallery backend server");

    let pool = load_database(&config).await?;

    let app_state = AppState {
        pool,
        config: Arc::new(config),
    };

    Ok(create_router(app_state))
}
