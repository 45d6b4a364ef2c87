//! Error types for the user directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! None of these errors are fatal: validation failures are reported back to the user
//! as notifications, and storage failures degrade to defaults.

use thiserror::Error;

/// The main error type for user directory operations.
///
/// # Examples
///
/// ```
/// use userdeck::DirectoryError;
///
/// fn read_preferences() -> Result<(), DirectoryError> {
///     Err(DirectoryError::Storage("preference file is locked".to_string()))
/// }
/// assert!(read_preferences().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A form submission failed validation.
    ///
    /// The string is the user-facing message, ready to be shown as an error
    /// notification.
    #[error("{0}")]
    Validation(String),

    /// Preference storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Seed data is malformed or violates id uniqueness.
    #[error("Seed data error: {0}")]
    Seed(String),

    /// A color palette could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Every user id up to `u64::MAX` is taken.
    #[error("No user ids left to assign")]
    IdsExhausted,

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for user directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
