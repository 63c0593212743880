//! Wallet state management
//!
//! Bridges the [`WalletConnector`] to Leptos: the connector's state is mirrored
//! into a signal, and its account-change subscription lives as long as the
//! owner that provided the context.

use std::rc::Rc;

use leptos::prelude::*;
use lib_wallet::{ConnectionState, InjectedProvider, WalletConnector, WalletError};

use crate::services::BrowserProvider;
use crate::state::notice::NoticeContext;

type BrowserConnector = WalletConnector<BrowserProvider>;

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<ConnectionState>,
    connector: StoredValue<Rc<BrowserConnector>, LocalStorage>,
    notices: NoticeContext,
}

impl WalletContext {
    pub fn new(notices: NoticeContext) -> Self {
        let wallet = RwSignal::new(ConnectionState::Disconnected);
        let connector = Rc::new(WalletConnector::new(BrowserProvider::new()));
        connector.observe(move |state| {
            let _ = wallet.try_set(state.clone());
        });

        Self {
            wallet,
            connector: StoredValue::new_local(connector),
            notices,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.with(|state| state.is_connected())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    /// Name of the injected wallet, read fresh on each call.
    pub fn wallet_name(&self) -> Option<&'static str> {
        self.connector
            .try_with_value(|connector| connector.provider().capabilities().wallet_name())
            .flatten()
    }

    pub fn button_label(&self) -> String {
        self.wallet.with(|state| state.button_label())
    }

    /// Ask the wallet for account access; failures become a notice.
    pub fn connect(&self) {
        let Some(connector) = self.connector.try_get_value() else {
            return;
        };
        let notices = self.notices;

        leptos::task::spawn_local(async move {
            match connector.connect().await {
                Ok(address) => {
                    log::info!("Wallet connect finished for {}", lib_utils::short_address(&address, 6));
                }
                Err(WalletError::Detached) => {}
                Err(err) => {
                    if let Some(message) = err.user_message() {
                        notices.error(message);
                    }
                }
            }
        });
    }

    pub fn disconnect(&self) {
        self.connector.with_value(|connector| connector.disconnect());
    }

    /// Subscribe to account changes and pick up an already-authorized account.
    /// Both are released when the current owner is cleaned up.
    fn attach(&self) {
        let Some(connector) = self.connector.try_get_value() else {
            return;
        };

        if !connector.attach() {
            log::info!("No injected wallet provider; account changes will not be tracked");
        }

        let discovering = connector.clone();
        leptos::task::spawn_local(async move {
            discovering.discover().await;
        });

        let handle = self.connector;
        on_cleanup(move || {
            handle.try_with_value(|connector| connector.detach());
        });
    }
}

pub fn provide_wallet_context(notices: NoticeContext) -> WalletContext {
    let context = WalletContext::new(notices);
    context.attach();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
