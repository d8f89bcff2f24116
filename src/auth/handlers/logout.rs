/**
 * Logout Handler
 *
 * POST /user/logout
 *
 * Clears the session cookie client-side. Purely advisory: the token
 * value is stateless and stays verifiable until its natural expiry, so a
 * copy replayed through the Authorization header is still accepted.
 */

use axum::response::Json;
use axum_extra::extract::CookieJar;

use crate::auth::cookies::removal_cookie;
use crate::auth::handlers::types::MessageResponse;

/// Logout handler: always succeeds
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    (
        jar.add(removal_cookie()),
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}
