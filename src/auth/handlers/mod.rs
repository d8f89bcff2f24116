//! Account Endpoint Handlers
//!
//! One handler per endpoint, plus the shared request/response types:
//!
//! - **`register`** - POST /user/register
//! - **`login`** - POST /user/login
//! - **`profile`** - GET /user/profile
//! - **`update`** - PUT /user/update
//! - **`logout`** - POST /user/logout

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User login handler
pub mod login;

/// Profile read handler
pub mod profile;

/// Profile update handler
pub mod update;

/// Logout handler
pub mod logout;

pub use login::login;
pub use logout::logout;
pub use profile::get_profile;
pub use register::register;
pub use update::update_profile;
