//! Image Storage
//!
//! Pass-through storage and retrieval for generated images. Records pair
//! an encoded blob with the prompt that produced it; the service checks
//! presence and nothing else.

/// Image model and database operations
pub mod db;

/// HTTP handlers for the image endpoints
pub mod handlers;

pub use db::Image;
pub use handlers::{get_images, save_image};
