//! Authentication and Account Management
//!
//! Registration, login, profile management, and the primitives they are
//! built on.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hash and verify
//! ├── sessions.rs     - JWT creation and verification
//! ├── cookies.rs      - Session cookie construction
//! ├── validation.rs   - Per-field request validation
//! └── handlers/       - HTTP handlers, one per endpoint
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate → hash → persist → public projection (201)
//! 2. **Login**: validate → lookup → verify → issue token → cookie + body
//! 3. **Protected routes**: the auth gate in `middleware::auth` verifies
//!    the token and attaches the identity; handlers read it through the
//!    `AuthUser` extractor
//! 4. **Logout**: clears the cookie; the token stays valid until expiry
//!
//! # Security
//!
//! - Passwords are bcrypt-hashed before storage and never serialized
//!   back out; responses use a projection with no hash field
//! - Tokens are stateless, signed with the configured secret, and live
//!   for one hour
//! - Unknown-user and wrong-password logins are indistinguishable

/// User model and database operations
pub mod users;

/// Password hashing and verification
pub mod passwords;

/// JWT creation and verification
pub mod sessions;

/// Session cookie construction
pub mod cookies;

/// Per-field request validation
pub mod validation;

/// HTTP handlers for the account endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use handlers::{get_profile, login, logout, register, update_profile};
