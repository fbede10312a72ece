//! Error types for the Kualala core.
//!
//! Every recoverable condition the UI can surface has its own enum so each
//! screen can render an inline message for exactly the failures it can see:
//!
//! - [`StorageError`] - durable flag store (localStorage) operations
//! - [`AuthError`] - login/signup rejected by the auth service
//! - [`PaymentError`] - payment submission rejected by the gateway
//! - [`CatalogError`] - malformed embedded catalog document
//! - [`UnknownScreen`] - screen name that is not one of the fixed values

use thiserror::Error;

/// Durable flag store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage backend not available (private mode, no window).
    #[error("storage not available")]
    Unavailable,
    /// Backend refused the write (quota, security policy).
    #[error("failed to write `{key}` to storage")]
    WriteFailed { key: String },
}

/// Authentication failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("you must accept the terms of service")]
    TermsNotAccepted,
    /// Credentials rejected by the backend.
    #[error("invalid email or password")]
    Rejected,
}

/// Payment failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("card number must be 13 to 19 digits")]
    InvalidCardNumber,
    #[error("expiry date must look like MM/YY")]
    InvalidExpiry,
    #[error("CVV must be 3 or 4 digits")]
    InvalidCvv,
    #[error("unknown payment method `{0}`")]
    UnknownMethod(String),
    #[error("payment declined: {0}")]
    Declined(String),
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog references unknown book id {0}")]
    DanglingBook(u32),
    #[error("catalog has no reader chapters")]
    NoChapters,
}

/// Screen name that does not match any known screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen `{0}`")]
pub struct UnknownScreen(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            AuthError::MissingField("email").to_string(),
            "email is required"
        );
        assert_eq!(
            StorageError::WriteFailed {
                key: "darkMode".into()
            }
            .to_string(),
            "failed to write `darkMode` to storage"
        );
        assert_eq!(
            UnknownScreen("home".into()).to_string(),
            "unknown screen `home`"
        );
    }
}
