/**
 * Image Endpoint Handlers
 *
 * POST /image/save-image and GET /image/get-images. Both endpoints are
 * public pass-throughs to the store; the only logic is the presence
 * check on save.
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::images::db::{insert_image, list_images, Image};

/// Save-image request body
///
/// Fields default to empty so an absent field fails the presence check
/// instead of deserialization.
#[derive(Deserialize, Serialize, Debug)]
pub struct SaveImageRequest {
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub prompt: String,
}

/// Save-image response body
#[derive(Serialize, Debug)]
pub struct SaveImageResponse {
    pub message: String,
    pub image: Image,
}

/// Save a generated image
///
/// # Errors
///
/// * `400 Bad Request` - image or prompt absent or empty
/// * `500 Internal Server Error` - store failure
pub async fn save_image(
    State(pool): State<PgPool>,
    Json(request): Json<SaveImageRequest>,
) -> Result<Json<SaveImageResponse>, ApiError> {
    if request.image.is_empty() || request.prompt.is_empty() {
        return Err(ApiError::MissingImageFields);
    }

    let record = insert_image(&pool, &request.image, &request.prompt).await?;

    tracing::info!("Image saved: {}", record.id);

    Ok(Json(SaveImageResponse {
        message: "Image saved successfully".to_string(),
        image: record,
    }))
}

/// List every stored image
///
/// # Errors
///
/// * `500 Internal Server Error` - store failure
pub async fn get_images(State(pool): State<PgPool>) -> Result<Json<Vec<Image>>, ApiError> {
    let images = list_images(&pool).await?;
    Ok(Json(images))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy_pool() -> PgPool {
        PgPool::connect_lazy("postgres://localhost/promptgallery_test").unwrap()
    }

    #[tokio::test]
    async fn test_save_rejects_missing_image_before_any_store_access() {
        let request = SaveImageRequest {
            image: String::new(),
            prompt: "a lighthouse at dusk".to_string(),
        };

        let result = save_image(State(lazy_pool()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::MissingImageFields)));
    }

    #[tokio::test]
    async fn test_save_rejects_missing_prompt_before_any_store_access() {
        let request = SaveImageRequest {
            image: "aGVsbG8=".to_string(),
            prompt: String::new(),
        };

        let result = save_image(State(lazy_pool()), Json(request)).await;
        assert!(matches!(result, Err(ApiError::MissingImageFields)));
    }
}
