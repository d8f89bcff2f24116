//! Request Middleware
//!
//! Cross-cutting request processing. Currently just the authentication
//! gate for protected routes.

/// Authentication gate and identity extractor
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
