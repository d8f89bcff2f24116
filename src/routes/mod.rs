//! Route Configuration
//!
//! Router assembly for the HTTP surface:
//!
//! - `POST /user/register`, `POST /user/login`, `POST /user/logout` - public
//! - `GET /user/profile`, `PUT /user/update` - behind the auth gate
//! - `POST /image/save-image`, `GET /image/get-images` - public

/// Full router assembly and cross-cutting layers
pub mod router;

/// Account routes
pub mod user_routes;

/// Image routes
pub mod image_routes;

pub use router::create_router;
