//! In-memory provider used by the connector tests.

use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ProviderError;
use crate::provider::{AccountsHandler, AccountsMethod, Capabilities, InjectedProvider, Subscription};

type AccountsResult = Result<Vec<String>, ProviderError>;
type Listeners = Rc<RefCell<Vec<(u64, AccountsHandler)>>>;

pub struct FakeProvider {
    caps: Capabilities,
    request: RefCell<AccountsResult>,
    existing: RefCell<AccountsResult>,
    held: RefCell<Option<oneshot::Receiver<AccountsResult>>>,
    listeners: Listeners,
    next_id: Cell<u64>,
    requests: Cell<usize>,
}

impl FakeProvider {
    fn with_caps(caps: Capabilities, request: AccountsResult) -> Self {
        Self {
            caps,
            request: RefCell::new(request),
            existing: RefCell::new(Ok(Vec::new())),
            held: RefCell::new(None),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            requests: Cell::new(0),
        }
    }

    fn metamask() -> Capabilities {
        Capabilities {
            installed: true,
            can_request: true,
            can_subscribe: true,
            is_metamask: true,
        }
    }

    pub fn absent() -> Self {
        Self::with_caps(Capabilities::absent(), Ok(Vec::new()))
    }

    pub fn without_request() -> Self {
        let caps = Capabilities {
            can_request: false,
            ..Self::metamask()
        };
        Self::with_caps(caps, Ok(Vec::new()))
    }

    pub fn resolving(accounts: &[&str]) -> Self {
        Self::with_caps(Self::metamask(), Ok(to_accounts(accounts)))
    }

    pub fn rejecting(err: ProviderError) -> Self {
        Self::with_caps(Self::metamask(), Err(err))
    }

    pub fn set_request(&self, result: AccountsResult) {
        *self.request.borrow_mut() = result;
    }

    pub fn set_existing(&self, result: AccountsResult) {
        *self.existing.borrow_mut() = result;
    }

    /// Make the next `eth_requestAccounts` wait for `rx`.
    pub fn hold_request(&self, rx: oneshot::Receiver<AccountsResult>) {
        *self.held.borrow_mut() = Some(rx);
    }

    /// Number of `eth_requestAccounts` calls seen.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Fire `accountsChanged` with `accounts`.
    pub fn emit(&self, accounts: &[&str]) {
        let accounts = to_accounts(accounts);
        for (_, handler) in self.listeners.borrow_mut().iter_mut() {
            handler(accounts.clone());
        }
    }
}

fn to_accounts(accounts: &[&str]) -> Vec<String> {
    accounts.iter().map(|a| a.to_string()).collect()
}

#[async_trait(?Send)]
impl InjectedProvider for FakeProvider {
    fn capabilities(&self) -> Capabilities {
        self.caps
    }

    async fn request_accounts(&self, method: AccountsMethod) -> Result<Vec<String>, ProviderError> {
        match method {
            AccountsMethod::Existing => self.existing.borrow().clone(),
            AccountsMethod::Request => {
                self.requests.set(self.requests.get() + 1);
                let held = self.held.borrow_mut().take();
                match held {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(ProviderError::new(None, "request dropped"))),
                    None => self.request.borrow().clone(),
                }
            }
        }
    }

    fn on_accounts_changed(&self, handler: AccountsHandler) -> Result<Subscription, ProviderError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, handler));

        let listeners = self.listeners.clone();
        Ok(Subscription::new(move || {
            listeners.borrow_mut().retain(|(listener, _)| *listener != id);
        }))
    }
}
