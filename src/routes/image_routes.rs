/**
 * Image Route Configuration
 *
 * Image endpoints under /image. Both are public.
 */

use axum::{routing, Router};

use crate::images::{get_images, save_image};
use crate::server::state::AppState;

/// Configure the /image routes
pub fn configure_image_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/image/save-image", routing::post(save_image))
        .route("/image/get-images", routing::get(get_images))
}
