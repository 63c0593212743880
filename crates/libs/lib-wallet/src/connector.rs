//! # Wallet Connector
//!
//! One reusable connection state machine for every page that shows a wallet
//! button.
//!
//! ## Lifecycle
//!
//! 1. [`WalletConnector::attach`] on mount: subscribes to account changes.
//! 2. [`WalletConnector::discover`] adopts an already-authorized account, if any.
//! 3. [`WalletConnector::connect`] on user request.
//! 4. [`WalletConnector::detach`] on teardown: releases the subscription; any
//!    response still in flight is discarded.
//!
//! Failures end the attempt and leave the previous state in place; there is
//! no retry.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lib_utils::format::format_address;

use crate::error::WalletError;
use crate::provider::{AccountsHandler, AccountsMethod, InjectedProvider, Subscription};
use crate::state::ConnectionState;

type Observer = Box<dyn Fn(&ConnectionState)>;

struct Inner {
    state: RefCell<ConnectionState>,
    live: Cell<bool>,
    observer: RefCell<Option<Observer>>,
    subscription: RefCell<Option<Subscription>>,
}

impl Inner {
    fn set_state(&self, next: ConnectionState) {
        if !self.live.get() {
            return;
        }

        {
            let mut state = self.state.borrow_mut();
            if *state == next {
                return;
            }
            *state = next;
        }

        let snapshot = self.state.borrow().clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    /// Put `previous` back unless something else replaced `Connecting` meanwhile.
    fn revert(&self, previous: ConnectionState) {
        if self.state.borrow().is_connecting() {
            self.set_state(previous);
        }
    }

    fn apply_accounts(&self, accounts: &[String]) {
        if !self.live.get() {
            return;
        }
        match accounts.first() {
            Some(address) => log::info!("Wallet account changed to {}", format_address(address, 6, 4)),
            None => log::info!("Wallet reported no accounts; clearing connection"),
        }
        self.set_state(ConnectionState::from_accounts(accounts));
    }
}

/// Connection state machine over an [`InjectedProvider`].
pub struct WalletConnector<P> {
    provider: P,
    inner: Rc<Inner>,
}

impl<P: InjectedProvider> WalletConnector<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            inner: Rc::new(Inner {
                state: RefCell::new(ConnectionState::Disconnected),
                live: Cell::new(true),
                observer: RefCell::new(None),
                subscription: RefCell::new(None),
            }),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> ConnectionState {
        self.inner.state.borrow().clone()
    }

    pub fn address(&self) -> Option<String> {
        self.inner.state.borrow().address().map(str::to_string)
    }

    /// Whether [`detach`](Self::detach) has not been called yet.
    pub fn is_live(&self) -> bool {
        self.inner.live.get()
    }

    /// Register the single observer notified after every state change.
    pub fn observe(&self, observer: impl Fn(&ConnectionState) + 'static) {
        *self.inner.observer.borrow_mut() = Some(Box::new(observer));
    }

    /// Request account access and store the first returned address.
    ///
    /// Already connected: returns the stored address without prompting.
    pub async fn connect(&self) -> Result<String, WalletError> {
        if !self.is_live() {
            return Err(WalletError::Detached);
        }
        if let Some(address) = self.address() {
            log::debug!("Connect requested while connected; keeping current account");
            return Ok(address);
        }

        let caps = self.provider.capabilities();
        if !caps.can_connect() {
            log::warn!("Connect requested but no injected provider with a request method");
            return Err(WalletError::NotInstalled);
        }

        let previous = self.state();
        self.inner.set_state(ConnectionState::Connecting);
        log::debug!("Requesting wallet accounts");

        let result = self.provider.request_accounts(AccountsMethod::Request).await;
        if !self.is_live() {
            log::debug!("Discarding account response received after detach");
            return Err(WalletError::Detached);
        }

        match result {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(address) => {
                    log::info!(
                        "{} connected: {}",
                        caps.wallet_name().unwrap_or("Wallet"),
                        format_address(&address, 6, 4)
                    );
                    self.inner.set_state(ConnectionState::Connected {
                        address: address.clone(),
                    });
                    Ok(address)
                }
                None => {
                    log::warn!("Wallet returned an empty account list");
                    self.inner.revert(previous);
                    Err(WalletError::NoAccounts)
                }
            },
            Err(err) => {
                log::warn!("Wallet account request failed: {}", err);
                self.inner.revert(previous);
                Err(err.into())
            }
        }
    }

    /// Adopt an account this origin is already authorized for, without prompting.
    ///
    /// Only applies when no address is known yet.
    pub async fn discover(&self) -> Option<String> {
        if !self.is_live() || !self.provider.capabilities().can_connect() {
            return None;
        }

        let accounts = match self.provider.request_accounts(AccountsMethod::Existing).await {
            Ok(accounts) => accounts,
            Err(err) => {
                log::debug!("eth_accounts failed: {}", err);
                return None;
            }
        };
        if !self.is_live() {
            return None;
        }

        let address = accounts.into_iter().next()?;
        if self.inner.state.borrow().address().is_none() {
            log::info!("Found authorized wallet account {}", format_address(&address, 6, 4));
            self.inner.set_state(ConnectionState::Connected {
                address: address.clone(),
            });
        }
        Some(address)
    }

    /// Forget the stored address. The provider keeps its authorization.
    pub fn disconnect(&self) {
        log::info!("Wallet disconnected locally");
        self.inner.set_state(ConnectionState::Disconnected);
    }

    /// Subscribe to account-change notifications.
    ///
    /// Returns `None` when there is no provider or it cannot notify.
    pub fn subscribe(&self) -> Option<Subscription> {
        if !self.is_live() {
            return None;
        }
        if !self.provider.capabilities().can_listen() {
            log::debug!("Injected provider cannot notify account changes");
            return None;
        }

        let inner = Rc::downgrade(&self.inner);
        let handler: AccountsHandler = Box::new(move |accounts: Vec<String>| {
            if let Some(inner) = inner.upgrade() {
                inner.apply_accounts(&accounts);
            }
        });

        match self.provider.on_accounts_changed(handler) {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                log::warn!("Failed to subscribe to account changes: {}", err);
                None
            }
        }
    }

    /// Subscribe and keep the subscription until [`detach`](Self::detach).
    ///
    /// Returns whether a subscription is held.
    pub fn attach(&self) -> bool {
        if self.inner.subscription.borrow().is_some() {
            return true;
        }
        let subscription = self.subscribe();
        let attached = subscription.is_some();
        *self.inner.subscription.borrow_mut() = subscription;
        attached
    }

    /// Tear down: unsubscribe and stop all further state updates. Terminal.
    pub fn detach(&self) {
        self.inner.live.set(false);
        let subscription = self.inner.subscription.borrow_mut().take();
        drop(subscription);
        self.inner.observer.borrow_mut().take();
        log::debug!("Wallet connector detached");
    }
}

impl<P> Drop for WalletConnector<P> {
    fn drop(&mut self) {
        self.inner.live.set(false);
        self.inner.subscription.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::fake::FakeProvider;
    use futures::channel::oneshot;
    use futures::executor::block_on;

    fn recorded(connector: &WalletConnector<FakeProvider>) -> Rc<RefCell<Vec<ConnectionState>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        connector.observe(move |state| sink.borrow_mut().push(state.clone()));
        seen
    }

    #[test]
    fn test_connect_without_provider() {
        let connector = WalletConnector::new(FakeProvider::absent());
        let seen = recorded(&connector);

        let err = block_on(connector.connect()).unwrap_err();

        assert_eq!(err, WalletError::NotInstalled);
        assert_eq!(err.user_message().as_deref(), Some("MetaMask is not installed"));
        assert_eq!(connector.address(), None);
        assert!(seen.borrow().is_empty());
        assert_eq!(connector.provider().request_count(), 0);
    }

    #[test]
    fn test_connect_without_request_method() {
        let connector = WalletConnector::new(FakeProvider::without_request());
        let err = block_on(connector.connect()).unwrap_err();
        assert_eq!(err, WalletError::NotInstalled);
        assert_eq!(connector.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_connect_stores_first_address() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC", "0x123"]));
        let seen = recorded(&connector);

        let address = block_on(connector.connect()).unwrap();

        assert_eq!(address, "0xABC");
        assert_eq!(connector.address().as_deref(), Some("0xABC"));
        assert_eq!(
            *seen.borrow(),
            vec![
                ConnectionState::Connecting,
                ConnectionState::Connected { address: "0xABC".to_string() },
            ]
        );
    }

    #[test]
    fn test_connect_rejected() {
        let connector = WalletConnector::new(FakeProvider::rejecting(ProviderError::new(
            Some(ProviderError::USER_REJECTED),
            "User rejected the request.",
        )));
        let seen = recorded(&connector);

        let err = block_on(connector.connect()).unwrap_err();

        assert_eq!(err, WalletError::Rejected);
        assert!(err.user_message().is_some());
        assert_eq!(connector.address(), None);
        assert_eq!(
            *seen.borrow(),
            vec![ConnectionState::Connecting, ConnectionState::Disconnected]
        );
    }

    #[test]
    fn test_connect_when_connected_skips_request() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        block_on(connector.connect()).unwrap();
        let seen = recorded(&connector);

        connector
            .provider()
            .set_request(Err(ProviderError::new(Some(-32603), "Internal JSON-RPC error.")));
        let address = block_on(connector.connect()).unwrap();

        assert_eq!(address, "0xABC");
        assert_eq!(connector.provider().request_count(), 1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_connect_failure_after_disconnect() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        block_on(connector.connect()).unwrap();
        connector.disconnect();

        connector
            .provider()
            .set_request(Err(ProviderError::new(Some(-32603), "Internal JSON-RPC error.")));
        let err = block_on(connector.connect()).unwrap_err();

        assert_eq!(err, WalletError::Failed("Internal JSON-RPC error.".to_string()));
        assert_eq!(connector.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_connect_empty_account_list() {
        let connector = WalletConnector::new(FakeProvider::resolving(&[]));
        let err = block_on(connector.connect()).unwrap_err();
        assert_eq!(err, WalletError::NoAccounts);
        assert_eq!(connector.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_account_change_updates_and_clears() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        assert!(connector.attach());
        block_on(connector.connect()).unwrap();

        connector.provider().emit(&["0xDEF"]);
        assert_eq!(connector.address().as_deref(), Some("0xDEF"));

        connector.provider().emit(&[]);
        assert_eq!(connector.address(), None);
        assert_eq!(connector.state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_account_change_before_connect() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        connector.attach();
        connector.provider().emit(&["0xDEF"]);
        assert_eq!(connector.address().as_deref(), Some("0xDEF"));
    }

    #[test]
    fn test_subscribe_without_provider() {
        let connector = WalletConnector::new(FakeProvider::absent());
        assert!(connector.subscribe().is_none());
        assert!(!connector.attach());
    }

    #[test]
    fn test_subscription_dropped_unsubscribes() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        let subscription = connector.subscribe().unwrap();
        assert_eq!(connector.provider().listener_count(), 1);

        drop(subscription);
        assert_eq!(connector.provider().listener_count(), 0);

        connector.provider().emit(&["0xDEF"]);
        assert_eq!(connector.address(), None);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        assert!(connector.attach());
        assert!(connector.attach());
        assert_eq!(connector.provider().listener_count(), 1);
    }

    #[test]
    fn test_detach_releases_subscription_and_freezes_state() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        let seen = recorded(&connector);
        connector.attach();
        connector.detach();

        assert_eq!(connector.provider().listener_count(), 0);
        assert!(!connector.is_live());
        assert_eq!(block_on(connector.connect()), Err(WalletError::Detached));
        assert!(seen.borrow().is_empty());
        assert!(!connector.attach());
    }

    #[test]
    fn test_response_after_detach_is_discarded() {
        let connector = WalletConnector::new(FakeProvider::resolving(&[]));
        let (tx, rx) = oneshot::channel();
        connector.provider().hold_request(rx);
        let seen = recorded(&connector);
        let handle = &connector;

        // join polls connect() first, so the request is pending when detach runs
        let (result, ()) = block_on(futures::future::join(connector.connect(), async move {
            handle.detach();
            let _ = tx.send(Ok(vec!["0xABC".to_string()]));
        }));

        assert_eq!(result, Err(WalletError::Detached));
        assert_eq!(connector.address(), None);
        assert_eq!(*seen.borrow(), vec![ConnectionState::Connecting]);
    }

    #[test]
    fn test_account_change_during_rejected_request_is_kept() {
        let connector = WalletConnector::new(FakeProvider::resolving(&[]));
        connector.attach();
        let (tx, rx) = oneshot::channel();
        connector.provider().hold_request(rx);
        let seen = recorded(&connector);
        let provider = connector.provider();

        let (result, ()) = block_on(futures::future::join(connector.connect(), async move {
            provider.emit(&["0xDEF"]);
            let _ = tx.send(Err(ProviderError::new(
                Some(ProviderError::USER_REJECTED),
                "User rejected the request.",
            )));
        }));

        assert_eq!(result, Err(WalletError::Rejected));
        assert_eq!(connector.address().as_deref(), Some("0xDEF"));
        assert_eq!(
            *seen.borrow(),
            vec![
                ConnectionState::Connecting,
                ConnectionState::Connected { address: "0xDEF".to_string() },
            ]
        );
    }

    #[test]
    fn test_discover_while_connect_pending() {
        let connector = WalletConnector::new(FakeProvider::resolving(&[]));
        connector.provider().set_existing(Ok(vec!["0x777".to_string()]));
        let (tx, rx) = oneshot::channel();
        connector.provider().hold_request(rx);
        let handle = &connector;

        let (result, discovered) = block_on(futures::future::join(connector.connect(), async move {
            let discovered = handle.discover().await;
            let _ = tx.send(Ok(vec!["0xABC".to_string()]));
            discovered
        }));

        assert_eq!(discovered.as_deref(), Some("0x777"));
        assert_eq!(result.as_deref(), Ok("0xABC"));
        assert_eq!(connector.address().as_deref(), Some("0xABC"));
    }

    #[test]
    fn test_discover_existing_account() {
        let connector = WalletConnector::new(FakeProvider::resolving(&[]));
        connector.provider().set_existing(Ok(vec!["0x777".to_string()]));

        assert_eq!(block_on(connector.discover()).as_deref(), Some("0x777"));
        assert_eq!(connector.address().as_deref(), Some("0x777"));
        assert_eq!(connector.provider().request_count(), 0);
    }

    #[test]
    fn test_discover_does_not_override_connected() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        block_on(connector.connect()).unwrap();
        connector.provider().set_existing(Ok(vec!["0x777".to_string()]));

        block_on(connector.discover());
        assert_eq!(connector.address().as_deref(), Some("0xABC"));
    }

    #[test]
    fn test_discover_without_provider() {
        let connector = WalletConnector::new(FakeProvider::absent());
        assert_eq!(block_on(connector.discover()), None);
    }

    #[test]
    fn test_disconnect() {
        let connector = WalletConnector::new(FakeProvider::resolving(&["0xABC"]));
        block_on(connector.connect()).unwrap();
        assert!(connector.state().is_connected());

        connector.disconnect();
        assert!(!connector.state().is_connected());
        assert_eq!(connector.address(), None);
    }
}
