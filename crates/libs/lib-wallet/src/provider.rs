//! Injected provider capability.
//!
//! Models the EIP-1193 object a wallet extension injects into the page. Every
//! member is optional in the wild, so callers check [`Capabilities`] before
//! using a method.

use async_trait::async_trait;
use std::fmt;

use crate::error::ProviderError;

/// Notification name for account changes.
pub const ACCOUNTS_CHANGED: &str = "accountsChanged";

/// Callback invoked with the provider's new account list.
pub type AccountsHandler = Box<dyn FnMut(Vec<String>)>;

/// Which members the injected provider actually exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// A provider object is present.
    pub installed: bool,
    /// It exposes `request`.
    pub can_request: bool,
    /// It exposes `on` for notifications.
    pub can_subscribe: bool,
    /// It identifies itself as MetaMask.
    pub is_metamask: bool,
}

impl Capabilities {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn can_connect(&self) -> bool {
        self.installed && self.can_request
    }

    pub fn can_listen(&self) -> bool {
        self.installed && self.can_subscribe
    }

    /// Display name of the injected wallet, if any.
    pub fn wallet_name(&self) -> Option<&'static str> {
        match (self.installed, self.is_metamask) {
            (false, _) => None,
            (true, true) => Some("MetaMask"),
            (true, false) => Some("Browser wallet"),
        }
    }
}

/// Account-returning RPC methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountsMethod {
    /// Prompt the user for access.
    Request,
    /// Accounts already authorized for this origin, without prompting.
    Existing,
}

impl AccountsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountsMethod::Request => "eth_requestAccounts",
            AccountsMethod::Existing => "eth_accounts",
        }
    }
}

/// An injected wallet provider.
#[async_trait(?Send)]
pub trait InjectedProvider {
    /// Probe the provider; called at the time of each operation.
    fn capabilities(&self) -> Capabilities;

    /// Call an account-returning method.
    async fn request_accounts(&self, method: AccountsMethod) -> Result<Vec<String>, ProviderError>;

    /// Register `handler` for [`ACCOUNTS_CHANGED`]. The listener stays
    /// registered until the returned [`Subscription`] is dropped.
    fn on_accounts_changed(&self, handler: AccountsHandler) -> Result<Subscription, ProviderError>;
}

/// Live notification registration; unsubscribes exactly once, on
/// [`Subscription::unsubscribe`] or on drop.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscription_unsubscribes_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let mut sub = Subscription::new(move || counter.set(counter.get() + 1));

        assert!(sub.is_active());
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(!sub.is_active());
        drop(sub);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_unsubscribes_on_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        drop(Subscription::new(move || counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_capabilities() {
        assert!(!Capabilities::absent().can_connect());
        let caps = Capabilities {
            installed: true,
            can_request: false,
            can_subscribe: true,
            is_metamask: true,
        };
        assert!(!caps.can_connect());
        assert!(caps.can_listen());
        assert_eq!(caps.wallet_name(), Some("MetaMask"));

        let other = Capabilities {
            is_metamask: false,
            ..caps
        };
        assert_eq!(other.wallet_name(), Some("Browser wallet"));
        assert_eq!(Capabilities::absent().wallet_name(), None);
    }

    #[test]
    fn test_accounts_method_names() {
        assert_eq!(AccountsMethod::Request.as_str(), "eth_requestAccounts");
        assert_eq!(AccountsMethod::Existing.as_str(), "eth_accounts");
    }
}
