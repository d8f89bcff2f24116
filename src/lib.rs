//! PromptGallery Backend
//!
//! A small CRUD backend for an AI image-generation frontend: user
//! registration, login, and profile management, plus storage and
//! retrieval of generated images as encoded blobs paired with their
//! prompts. A thin axum HTTP API over PostgreSQL, with authentication
//! via signed JWT tokens delivered in an http-only cookie or an
//! Authorization header.
//!
//! # Module Structure
//!
//! - **`server`** - configuration, shared state, application assembly
//! - **`routes`** - router assembly and the HTTP surface
//! - **`auth`** - accounts: store, hashing, tokens, validation, handlers
//! - **`images`** - image storage pass-through
//! - **`middleware`** - the authentication gate
//! - **`error`** - request error taxonomy and response conversion
//!
//! # Authentication Model
//!
//! Sessions are stateless JWTs with a one-hour lifetime, minted at login
//! and carried by the `token` cookie or a bearer header. Logout clears
//! the cookie only; a token value stays verifiable until it expires.
//!
//! # Usage
//!
//! ```rust,no_run
//! use promptgallery::server::config::AppConfig;
//! use promptgallery::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and account management
pub mod auth;

/// Image storage
pub mod images;

/// Request middleware
pub mod middleware;

/// Error types
pub mod error;

pub use error::ApiError;
pub use server::create_app;
