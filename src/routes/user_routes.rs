/**
 * User Route Configuration
 *
 * Account endpoints under /user. Register, login, and logout are public;
 * profile and update sit behind the authentication gate.
 */

use axum::{middleware, routing, Router};

use crate::auth::{get_profile, login, logout, register, update_profile};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure the /user routes
///
/// The gate is applied as a route layer on the protected pair only, so
/// the public endpoints never pay for token extraction.
pub fn configure_user_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/user/profile", routing::get(get_profile))
        .route("/user/update", routing::put(update_profile))
        .route_layer(middleware::from_fn_with_state(app_state, auth_middleware));

    router
        .route("/user/register", routing::post(register))
        .route("/user/login", routing::post(login))
        .route("/user/logout", routing::post(logout))
        .merge(protected)
}
