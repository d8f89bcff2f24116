/**
 * Session Cookie Construction
 *
 * Builders for the `token` cookie that carries the session JWT to
 * browsers. The cookie is http-only and scoped to the whole site; the
 * `secure` flag is only set in production so local development over
 * plain HTTP keeps working.
 */

use axum_extra::extract::cookie::Cookie;

use crate::auth::sessions::TOKEN_TTL_SECS;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Build the login cookie carrying a freshly issued token
///
/// Max-age matches the token TTL, so the cookie and the token expire
/// together.
pub fn auth_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .path("/")
        .max_age(time::Duration::seconds(TOKEN_TTL_SECS as i64))
        .build()
}

/// Build the logout cookie that clears the session client-side
///
/// Advisory only: the token value itself stays valid until its natural
/// expiry if replayed through the Authorization header.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_flags() {
        let cookie = auth_cookie("abc".to_string(), false);
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::seconds(TOKEN_TTL_SECS as i64))
        );
    }

    #[test]
    fn test_auth_cookie_secure_in_production() {
        let cookie = auth_cookie("abc".to_string(), true);
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
