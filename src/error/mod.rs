//! Error Types
//!
//! The request-level error taxonomy and its conversion to HTTP responses.
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse`
//! implementation turns each failure into the JSON `{message}` shape
//! (plus `{errors}` for validation failures) with the proper status code.

/// Error taxonomy
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::ApiError;
