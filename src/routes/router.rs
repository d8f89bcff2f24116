/**
 * Router Configuration
 *
 * Assembles the full application router: user routes, image routes, and
 * the cross-cutting layers.
 *
 * # Layers, inside out
 *
 * 1. Body limit of 10 MiB, sized for encoded image payloads
 * 2. CORS for the configured frontend origin, with credentials so the
 *    session cookie travels
 * 3. Panic guard: a panicking handler becomes a generic 500 instead of a
 *    dropped connection
 *
 * Unknown routes fall through to a JSON 404.
 */

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::routes::image_routes::configure_image_routes;
use crate::routes::user_routes::configure_user_routes;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Maximum JSON body size: encoded images are large
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the application router with all routes and layers configured
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new();
    let router = configure_user_routes(router, app_state.clone());
    let router = configure_image_routes(router);

    router
        .fallback(handle_not_found)
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(&app_state.config))
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(app_state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::COOKIE])
        .allow_credentials(true)
}

async fn handle_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Not found" })),
    )
}

/// Last-resort conversion of a handler panic into a response
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "message": "Something went wrong!" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_payloads_render_a_generic_500() {
        for payload in [
            Box::new("str panic") as Box<dyn std::any::Any + Send>,
            Box::new("string panic".to_string()),
            Box::new(42_u32),
        ] {
            let response = handle_panic(payload);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
