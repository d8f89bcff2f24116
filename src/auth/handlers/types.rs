/**
 * Account Handler Types
 *
 * Request and response types shared by the account endpoints. Request
 * fields default to empty strings so an absent field reports as a
 * validation violation instead of a deserialization failure.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Chosen username (min 5 characters after trimming)
    #[serde(default)]
    pub username: String,
    /// Email address (well-formed, min 13 characters after trimming)
    #[serde(default)]
    pub email: String,
    /// Password (min 5 characters, hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Profile update request: only username and email can change here
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Public projection of a user record
///
/// The only user shape that crosses a response boundary. The password
/// hash is not a field here, so no handler can leak it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Login response: the token travels in the body as well as the cookie
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Bare acknowledgement body
#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_projection_has_no_password_field() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice123".to_string(),
            email: "alice123@example.com".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let hash = user.password_hash.clone();

        let response: UserResponse = user.into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains(&hash));
        assert!(json.contains("alice123@example.com"));
    }

    #[test]
    fn test_missing_request_fields_default_to_empty() {
        let request: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.username, "");
        assert_eq!(request.email, "");
        assert_eq!(request.password, "");
    }
}
