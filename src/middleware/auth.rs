/**
 * Authentication Middleware
 *
 * The gate in front of protected routes. It extracts the session token,
 * verifies it, and attaches the decoded identity to the request so
 * handlers can extract it with `AuthUser`.
 *
 * # Token Sources
 *
 * 1. The `token` cookie
 * 2. The `Authorization: Bearer <token>` header
 *
 * The cookie wins when both are present. A missing token and a failing
 * one both reject with 401; expired and malformed tokens are not
 * distinguished to the caller.
 *
 * The gate is a pure function of the token and the configured secret: it
 * never touches the store. A verified identity whose record has since
 * vanished surfaces as 404 in the handler that fetches it.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::cookies::TOKEN_COOKIE;
use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity decoded from a verified session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
}

/// Authentication middleware for protected routes
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&jar, request.headers()).ok_or_else(|| {
        tracing::warn!("No token on protected route: {}", request.uri().path());
        ApiError::MissingToken
    })?;

    let claims = verify_token(&token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::InvalidToken
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Unparseable user id in token claims: {:?}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Pull the session token out of a request
///
/// Cookie first, then bearer header.
pub fn extract_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Extractor handing protected handlers the attached identity
///
/// Rejects with 401 when the gate did not run on the route.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingToken
            })
    }
}
