/**
 * Profile Handler
 *
 * GET /user/profile (protected)
 *
 * Fetches the record for the identity the auth gate attached. The id in
 * a verified token can still fail to resolve if the record disappeared
 * after issuance; that case is a 404, not an auth failure.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Profile read handler
///
/// # Errors
///
/// * `401 Unauthorized` - rejected by the auth gate before this runs
/// * `404 Not Found` - the token's user id no longer resolves
/// * `500 Internal Server Error` - store failure
pub async fn get_profile(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, identity.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Profile for vanished user: {}", identity.user_id);
            ApiError::NotFound
        })?;

    Ok(Json(user.into()))
}
