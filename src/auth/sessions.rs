/**
 * Session Tokens
 *
 * JWT creation and verification for user sessions. Tokens are stateless:
 * nothing is persisted server-side, and the only way a token stops being
 * accepted is its expiration. Logout clears the client cookie but does
 * not revoke the token value itself.
 *
 * The signing secret is injected by the caller from process
 * configuration, so both operations are pure functions of their inputs.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::users::User;

/// Session lifetime: one hour from issuance
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Claims embedded in a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID as string)
    pub sub: String,
    /// Email
    pub email: String,
    /// Username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Create a session token for a user
///
/// The token embeds the user's id, email, and username and expires
/// exactly `TOKEN_TTL_SECS` after issuance.
pub fn create_token(user: &User, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        username: user.username.clone(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a session token
///
/// Fails when the signature does not match the secret, the token is
/// malformed, or it is expired. Expiry is checked with zero leeway so a
/// token dies at the same instant its cookie does.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let mut validation = Validation::default();
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation)?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    const SECRET: &str = "test-secret";

    fn test_user() -> User {
        User {
            id: uuid::Uuid::new_v4(),
            username: "alice123".to_string(),
            email: "alice123@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn encode_claims(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    #[test]
    fn test_roundtrip_preserves_claims() {
        let user = test_user();
        let token = create_token(&user, SECRET).unwrap();

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_token(&test_user(), SECRET).unwrap();
        let result = verify_token(&token, "a-different-secret");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(verify_token("not.a.token", SECRET).is_err());
        assert!(verify_token("", SECRET).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let user = test_user();
        let now = now_secs();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email,
            username: user.username,
            exp: now - 60,
            iat: now - 60 - TOKEN_TTL_SECS,
        };
        let token = encode_claims(&claims, SECRET);

        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_token_near_expiry_is_still_accepted() {
        // One minute of lifetime left.
        let user = test_user();
        let now = now_secs();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email,
            username: user.username,
            exp: now + 60,
            iat: now + 60 - TOKEN_TTL_SECS,
        };
        let token = encode_claims(&claims, SECRET);

        assert!(verify_token(&token, SECRET).is_ok());
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = create_token(&test_user(), SECRET).unwrap();
        let mut tampered = token.clone();
        tampered.truncate(token.len() - 2);
        assert!(verify_token(&tampered, SECRET).is_err());
    }
}
