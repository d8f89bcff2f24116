/**
 * Field Validation
 *
 * Per-field validation for the account endpoints. Validation runs before
 * any database access and collects every violated field rather than
 * stopping at the first, so a client sees the complete list in one
 * response.
 *
 * All values are trimmed of surrounding whitespace before the rules are
 * applied.
 */

use serde::Serialize;

use crate::error::ApiError;

/// Minimum username length after trimming
pub const MIN_USERNAME_LEN: usize = 5;
/// Minimum password length after trimming
pub const MIN_PASSWORD_LEN: usize = 5;
/// Minimum email length after trimming
pub const MIN_EMAIL_LEN: usize = 13;

/// A single field-level violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate registration input: email, password, username
///
/// Fails with `ApiError::Validation` listing every violated field.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    check_email(email, &mut errors);
    check_password(password, &mut errors);
    check_username(username, &mut errors);
    finish(errors)
}

/// Validate login input: username and password minimum lengths
///
/// No email format check on login; the username is an opaque lookup key.
pub fn validate_login(username: &str, password: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    check_username(username, &mut errors);
    check_password(password, &mut errors);
    finish(errors)
}

/// Validate profile update input: username and email
///
/// Shares the registration rules so an update cannot store values that
/// registration would have rejected.
pub fn validate_profile_update(username: &str, email: &str) -> Result<(), ApiError> {
    let mut errors = Vec::new();
    check_username(username, &mut errors);
    check_email(email, &mut errors);
    finish(errors)
}

fn finish(errors: Vec<FieldError>) -> Result<(), ApiError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation { errors })
    }
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    let email = email.trim();
    if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "Invalid email",
        });
    }
    if email.len() < MIN_EMAIL_LEN {
        errors.push(FieldError {
            field: "email",
            message: "Email too short",
        });
    }
}

fn check_password(password: &str, errors: &mut Vec<FieldError>) {
    if password.trim().len() < MIN_PASSWORD_LEN {
        errors.push(FieldError {
            field: "password",
            message: "Password must be at least 5 characters",
        });
    }
}

fn check_username(username: &str, errors: &mut Vec<FieldError>) {
    if username.trim().len() < MIN_USERNAME_LEN {
        errors.push(FieldError {
            field: "username",
            message: "Username must be at least 5 characters",
        });
    }
}

/// Basic well-formedness check for an email address
///
/// One `@`, a non-empty local part, a domain containing a dot that is
/// neither leading nor trailing, and no whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
