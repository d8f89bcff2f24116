/**
 * Registration Handler
 *
 * POST /user/register
 *
 * # Registration Process
 *
 * 1. Validate username, email, and password (all rules, before any
 *    database access; every violated field is reported)
 * 2. Hash the password with bcrypt
 * 3. Insert the record; a unique-constraint conflict on username or
 *    email maps to a duplicate-account failure
 * 4. Return 201 with the public projection of the created record
 *
 * There is no lookup-then-insert: uniqueness lives in the schema, so two
 * concurrent registrations with the same email cannot both win.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::passwords::hash_password;
use crate::auth::users::create_user;
use crate::auth::validation::validate_registration;
use crate::error::ApiError;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - validation violations (all listed) or a
///   username/email already in use
/// * `500 Internal Server Error` - hashing or store failure
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    validate_registration(&request.username, &request.email, &request.password)?;

    let password_hash = hash_password(&request.password)?;

    let user = create_user(
        &pool,
        request.username.trim(),
        request.email.trim(),
        &password_hash,
    )
    .await?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok((StatusCode::CREATED, Json(user.into())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://localhost/promptgallery_test").unwrap()
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_input_before_any_store_access() {
        // The pool never connects; validation must fail first.
        let request = RegisterRequest {
            username: "ab".to_string(),
            email: "not-an-email".to_string(),
            password: "x".to_string(),
        };

        let result = register(State(lazy_pool()), Json(request)).await;
        match result {
            Err(ApiError::Validation { errors }) => assert_eq!(errors.len(), 4),
            other => panic!("expected validation failure, got {:?}", other.err()),
        }
    }
}
