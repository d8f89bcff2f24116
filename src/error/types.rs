/**
 * API Error Types
 *
 * This module defines the error taxonomy used by every HTTP handler.
 * Each variant maps to a fixed status code and a client-visible message;
 * server-side failures carry their source for logging but present a
 * generic message to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::validation::FieldError;

/// All failures a request can surface
///
/// Handlers return `Result<_, ApiError>` and propagate with `?`. The
/// `IntoResponse` implementation in `conversion` renders the JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more request fields violated the validation rules.
    ///
    /// Every violated field is listed, not just the first.
    #[error("Invalid data")]
    Validation { errors: Vec<FieldError> },

    /// A unique constraint on the users table rejected the write.
    ///
    /// Carries the display name of the conflicting field ("Email" or
    /// "Username").
    #[error("{0} already in use")]
    DuplicateAccount(&'static str),

    /// Unknown username or wrong password.
    ///
    /// Deliberately a single message for both cases so a caller cannot
    /// probe which one failed.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A protected route was called without a token in the cookie or
    /// the Authorization header.
    #[error("No token, authorization denied")]
    MissingToken,

    /// A token was presented but failed verification: bad signature,
    /// malformed, or expired. The cases are not distinguished.
    #[error("Token is not valid")]
    InvalidToken,

    /// The identity in a verified token no longer resolves to a record.
    #[error("User not found")]
    NotFound,

    /// Image save was called with a missing or empty field.
    #[error("Image and prompt are required")]
    MissingImageFields,

    /// Database failure. Detail is logged; the client sees a generic
    /// message.
    #[error("Server error")]
    Database(#[source] sqlx::Error),

    /// Password hashing failure.
    #[error("Server error")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token creation failure.
    #[error("Server error")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. }
            | Self::DuplicateAccount(_)
            | Self::InvalidCredentials
            | Self::MissingImageFields => StatusCode::BAD_REQUEST,
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hashing(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Map store errors onto the taxonomy
///
/// Unique-constraint violations become `DuplicateAccount`, resolved by
/// constraint name; everything else is a generic database failure.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return match db_err.constraint() {
                    Some("users_username_key") => ApiError::DuplicateAccount("Username"),
                    _ => ApiError::DuplicateAccount("Email"),
                };
            }
        }
        ApiError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let error = ApiError::Validation { errors: Vec::new() };
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Invalid data");
    }

    #[test]
    fn test_duplicate_account_message() {
        let error = ApiError::DuplicateAccount("Email");
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Email already in use");

        let error = ApiError::DuplicateAccount("Username");
        assert_eq!(error.to_string(), "Username already in use");
    }

    #[test]
    fn test_credential_failures_share_one_message() {
        // Unknown user and wrong password must be indistinguishable.
        let error = ApiError::InvalidCredentials;
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.to_string(), "Invalid username or password");
    }

    #[test]
    fn test_token_failures_map_to_unauthorized() {
        assert_eq!(
            ApiError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::MissingToken.to_string(),
            "No token, authorization denied"
        );
        assert_eq!(ApiError::InvalidToken.to_string(), "Token is not valid");
    }

    #[test]
    fn test_not_found_mapping() {
        let error = ApiError::NotFound;
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "User not found");
    }

    #[test]
    fn test_server_errors_present_generic_message() {
        let error = ApiError::Database(sqlx::Error::PoolClosed);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "Server error");
    }

    #[test]
    fn test_row_not_found_is_not_a_duplicate() {
        let error = ApiError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, ApiError::Database(_)));
    }
}
