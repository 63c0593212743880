//! # Centralized Error Handling
//!
//! [`AppError`] covers failures of the presale configuration and model layer.
//! Wallet failures have their own type in `lib-wallet` because they are shown
//! to the user verbatim, while these are developer-facing.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn parse_symbol(symbol: &str) -> Result<String> {
//!     if symbol.is_empty() {
//!         return Err(AppError::InvalidInput("Token symbol cannot be empty".to_string()));
//!     }
//!     Ok(symbol.to_uppercase())
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type for configuration and model validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Configuration error during startup or override parsing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A value failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// Configuration problems are a deployment concern, so the detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Config(_) => "The presale site is misconfigured".to_string(),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON error: {}", err))
    }
}

/// Convert `lib_utils::time::Error` to `AppError`.
impl From<lib_utils::time::Error> for AppError {
    fn from(err: lib_utils::time::Error) -> Self {
        AppError::Config(format!("Time error: {}", err))
    }
}
