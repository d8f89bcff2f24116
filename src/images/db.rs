/**
 * Image Model and Database Operations
 *
 * Storage for generated images: an encoded blob (base64 or URL, the
 * service does not inspect it) plus the prompt that produced it.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Stored image record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Image {
    /// Unique image ID (UUID)
    pub id: Uuid,
    /// Encoded image data
    pub image: String,
    /// Prompt that generated the image
    pub prompt: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persist a new image record
pub async fn insert_image(
    pool: &PgPool,
    image: &str,
    prompt: &str,
) -> Result<Image, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let record = sqlx::query_as::<_, Image>(
        r#"
        INSERT INTO images (id, image, prompt, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, image, prompt, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(image)
    .bind(prompt)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// Fetch every stored image
///
/// No pagination and no ORDER BY: callers get store-default order.
pub async fn list_images(pool: &PgPool) -> Result<Vec<Image>, sqlx::Error> {
    let images = sqlx::query_as::<_, Image>(
        r#"
        SELECT id, image, prompt, created_at, updated_at
        FROM images
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(images)
}
