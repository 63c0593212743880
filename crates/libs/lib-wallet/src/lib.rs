//! # Wallet Connector
//!
//! Browser-wallet connection logic behind a capability trait, so the same
//! state machine runs against `window.ethereum` in the page and against a
//! fake provider in tests.
//!
//! ## Structure
//!
//! - **[`provider`]**: [`InjectedProvider`] capability and the [`Subscription`] handle
//! - **[`state`]**: [`ConnectionState`] and the wallet button's [`ButtonAction`]
//! - **[`connector`]**: [`WalletConnector`], connect / discover / disconnect / subscribe
//! - **[`error`]**: [`WalletError`] and [`ProviderError`]

pub mod connector;
pub mod error;
pub mod provider;
pub mod state;

#[cfg(test)]
mod fake;

pub use connector::WalletConnector;
pub use error::{FailureKind, ProviderError, WalletError};
pub use provider::{AccountsHandler, AccountsMethod, Capabilities, InjectedProvider, Subscription};
pub use state::{ButtonAction, ConnectionState};
