/**
 * User Model and Database Operations
 *
 * The credential store: persisted user records and the queries the
 * account service runs against them. Uniqueness of username and email is
 * enforced by UNIQUE constraints in the schema, so a conflicting write
 * fails at the database rather than relying on a racy pre-check; the
 * error module maps that violation to `DuplicateAccount`.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record as stored
///
/// Deliberately not serializable: responses go through the public
/// projection in `handlers::types`, which has no hash field.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique)
    pub username: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt), never the plaintext
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new user
///
/// A unique-constraint violation on username or email surfaces as a
/// database error for the caller to map.
pub async fn create_user(
    pool: &PgPool,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, username, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username, or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID, or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Overwrite a user's username and email
///
/// Only those two fields change in this flow; the password hash is
/// untouched. Returns None when the id no longer resolves, e.g. the
/// record vanished between token issuance and use.
pub async fn update_profile(
    pool: &PgPool,
    id: Uuid,
    username: &str,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET username = $1, email = $2, updated_at = $3
        WHERE id = $4
        RETURNING id, username, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
