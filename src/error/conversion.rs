/**
 * Error Conversion
 *
 * Converts `ApiError` values into HTTP responses at the handler boundary.
 * Every failure becomes a JSON body of the form `{"message": ...}`, with
 * an additional `"errors"` array for validation failures. Server errors
 * are logged with full detail before the generic response is built.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed with server error: {:?}", self);
        }

        let body = match &self {
            ApiError::Validation { errors } => serde_json::json!({
                "message": self.to_string(),
                "errors": errors,
            }),
            _ => serde_json::json!({
                "message": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
