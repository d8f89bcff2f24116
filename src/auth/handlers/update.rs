/**
 * Profile Update Handler
 *
 * PUT /user/update (protected)
 *
 * Overwrites username and email only; the password never changes in this
 * flow. Input goes through the same field validation as registration,
 * and uniqueness conflicts surface exactly as they do there.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::{UpdateProfileRequest, UserResponse};
use crate::auth::users;
use crate::auth::validation::validate_profile_update;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Profile update handler
///
/// # Errors
///
/// * `400 Bad Request` - validation violations, or the new username or
///   email already in use
/// * `401 Unauthorized` - rejected by the auth gate before this runs
/// * `404 Not Found` - the token's user id no longer resolves
/// * `500 Internal Server Error` - store failure
pub async fn update_profile(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    validate_profile_update(&request.username, &request.email)?;

    let user = users::update_profile(
        &pool,
        identity.user_id,
        request.username.trim(),
        request.email.trim(),
    )
    .await?
    .ok_or_else(|| {
        tracing::warn!("Update for vanished user: {}", identity.user_id);
        ApiError::NotFound
    })?;

    tracing::info!("Profile updated: {} ({})", user.username, user.email);

    Ok(Json(user.into()))
}
