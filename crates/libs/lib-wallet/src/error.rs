//! Wallet errors.
//!
//! [`ProviderError`] is what an injected provider reports (EIP-1193 `code` and
//! `message`). [`WalletError`] is what a connection attempt ends with; its
//! `Display` text is the message shown to the user.

use thiserror::Error;

/// Error reported by the injected provider itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    /// EIP-1193 error code, when the provider supplied one.
    pub code: Option<i64>,
    pub message: String,
}

impl ProviderError {
    /// EIP-1193: the user rejected the request.
    pub const USER_REJECTED: i64 = 4001;
    /// EIP-1193: the requested method is not supported.
    pub const UNSUPPORTED_METHOD: i64 = 4200;

    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == Some(Self::USER_REJECTED)
    }
}

/// The two failure kinds the page distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotInstalled,
    Connection,
}

/// Outcome of a failed connection attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No provider is injected, or it lacks a request method.
    #[error("MetaMask is not installed")]
    NotInstalled,

    /// The user declined the account request.
    #[error("Wallet connection was rejected")]
    Rejected,

    /// The provider answered with an empty account list.
    #[error("Wallet returned no accounts")]
    NoAccounts,

    /// Any other provider failure.
    #[error("Wallet connection failed: {0}")]
    Failed(String),

    /// The view was torn down while the request was pending. Never shown.
    #[error("Wallet connector was detached")]
    Detached,
}

impl WalletError {
    pub fn kind(&self) -> FailureKind {
        match self {
            WalletError::NotInstalled => FailureKind::NotInstalled,
            WalletError::Rejected
            | WalletError::NoAccounts
            | WalletError::Failed(_)
            | WalletError::Detached => FailureKind::Connection,
        }
    }

    /// Message for the transient notice, or `None` when nothing should be shown.
    pub fn user_message(&self) -> Option<String> {
        match self {
            WalletError::Detached => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            WalletError::Rejected
        } else {
            WalletError::Failed(err.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_conversion() {
        let rejected = ProviderError::new(Some(ProviderError::USER_REJECTED), "User rejected the request.");
        assert_eq!(WalletError::from(rejected), WalletError::Rejected);

        let other = ProviderError::new(Some(-32002), "Request already pending");
        assert_eq!(
            WalletError::from(other),
            WalletError::Failed("Request already pending".to_string())
        );
    }

    #[test]
    fn test_failure_kinds() {
        assert_eq!(WalletError::NotInstalled.kind(), FailureKind::NotInstalled);
        assert_eq!(WalletError::Rejected.kind(), FailureKind::Connection);
        assert_eq!(WalletError::Failed("x".into()).kind(), FailureKind::Connection);
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            WalletError::NotInstalled.user_message().as_deref(),
            Some("MetaMask is not installed")
        );
        assert_eq!(
            WalletError::Failed("timeout".into()).user_message().as_deref(),
            Some("Wallet connection failed: timeout")
        );
        assert_eq!(WalletError::Detached.user_message(), None);
    }
}
