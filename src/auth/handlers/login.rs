/**
 * Login Handler
 *
 * POST /user/login
 *
 * # Authentication Process
 *
 * 1. Validate username and password minimum lengths
 * 2. Look up the user by username
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a one-hour session token
 * 5. Set the token as an http-only cookie and return it in the body
 *
 * # Security
 *
 * Unknown username and wrong password produce the identical response, so
 * a caller cannot probe which accounts exist. The cookie is marked
 * secure only in production deployments.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::auth::cookies::auth_cookie;
use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::passwords::verify_password;
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_username;
use crate::auth::validation::validate_login;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - validation violations, or invalid credentials
///   (unknown user and wrong password are not distinguished)
/// * `500 Internal Server Error` - store or token-creation failure
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    validate_login(&request.username, &request.password)?;

    let user = get_user_by_username(&state.pool, request.username.trim())
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown username: {}", request.username.trim());
            ApiError::InvalidCredentials
        })?;

    if !verify_password(&request.password, &user.password_hash) {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&user, &state.config.jwt_secret)?;
    let jar = jar.add(auth_cookie(
        token.clone(),
        state.config.environment.is_production(),
    ));

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok((
        jar,
        Json(LoginResponse {
            message: "Logged in successfully".to_string(),
            token,
        }),
    ))
}
