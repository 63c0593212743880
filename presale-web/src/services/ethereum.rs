//! Injected Ethereum Provider via wasm-bindgen
//!
//! Binds the EIP-1193 object MetaMask (and compatible extensions) inject as
//! `window.ethereum`, and exposes it to the connector as an [`InjectedProvider`].

use async_trait::async_trait;
use lib_wallet::{AccountsHandler, AccountsMethod, Capabilities, InjectedProvider, ProviderError, Subscription};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// PROVIDER DETECTION AND REQUESTS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function provider() {
    return typeof window !== 'undefined' ? window.ethereum : undefined;
}

export function ethereumCapabilities() {
    const eth = provider();
    return {
        installed: !!eth,
        can_request: !!eth && typeof eth.request === 'function',
        can_subscribe: !!eth && typeof eth.on === 'function',
        is_metamask: !!eth && eth.isMetaMask === true,
    };
}

export async function ethereumRequestAccounts(method) {
    const eth = provider();
    if (!eth || typeof eth.request !== 'function') {
        throw { code: 4200, message: 'No injected provider with a request method' };
    }
    try {
        const accounts = await eth.request({ method });
        return Array.isArray(accounts) ? accounts.map(String) : [];
    } catch (error) {
        throw {
            code: typeof error?.code === 'number' ? error.code : null,
            message: error?.message ? String(error.message) : String(error),
        };
    }
}

export function ethereumOn(event, callback) {
    const eth = provider();
    if (!eth || typeof eth.on !== 'function') {
        return false;
    }
    eth.on(event, callback);
    return true;
}

export function ethereumRemoveListener(event, callback) {
    const eth = provider();
    if (eth && typeof eth.removeListener === 'function') {
        eth.removeListener(event, callback);
    }
}
")]
extern "C" {
    /// Probe `window.ethereum` for the members we use
    fn ethereumCapabilities() -> JsValue;

    /// Call an account-returning method; rejects with `{ code, message }`
    #[wasm_bindgen(catch)]
    async fn ethereumRequestAccounts(method: &str) -> Result<JsValue, JsValue>;

    /// Register a notification listener; false when `on` is missing
    fn ethereumOn(event: &str, callback: &Closure<dyn FnMut(JsValue)>) -> bool;

    /// Remove a listener registered with `ethereumOn`
    fn ethereumRemoveListener(event: &str, callback: &Closure<dyn FnMut(JsValue)>);
}

#[derive(Deserialize)]
struct RawCapabilities {
    installed: bool,
    can_request: bool,
    can_subscribe: bool,
    is_metamask: bool,
}

#[derive(Deserialize)]
struct RawProviderError {
    code: Option<i64>,
    message: Option<String>,
}

fn to_provider_error(err: JsValue) -> ProviderError {
    match serde_wasm_bindgen::from_value::<RawProviderError>(err.clone()) {
        Ok(raw) => ProviderError::new(
            raw.code,
            raw.message.unwrap_or_else(|| "Unknown wallet error".to_string()),
        ),
        Err(_) => ProviderError::new(
            None,
            err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        ),
    }
}

fn to_accounts(value: JsValue) -> Vec<String> {
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        log::warn!("Provider returned an unexpected account list: {}", e);
        Vec::new()
    })
}

// ============================================================================
// BROWSER PROVIDER
// ============================================================================

/// `window.ethereum`, looked up on every call since extensions may inject late.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProvider;

impl BrowserProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl InjectedProvider for BrowserProvider {
    fn capabilities(&self) -> Capabilities {
        match serde_wasm_bindgen::from_value::<RawCapabilities>(ethereumCapabilities()) {
            Ok(raw) => Capabilities {
                installed: raw.installed,
                can_request: raw.can_request,
                can_subscribe: raw.can_subscribe,
                is_metamask: raw.is_metamask,
            },
            Err(e) => {
                log::warn!("Could not read provider capabilities: {}", e);
                Capabilities::absent()
            }
        }
    }

    async fn request_accounts(&self, method: AccountsMethod) -> Result<Vec<String>, ProviderError> {
        ethereumRequestAccounts(method.as_str())
            .await
            .map(to_accounts)
            .map_err(to_provider_error)
    }

    fn on_accounts_changed(&self, mut handler: AccountsHandler) -> Result<Subscription, ProviderError> {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            handler(to_accounts(accounts));
        });

        if !ethereumOn(lib_wallet::provider::ACCOUNTS_CHANGED, &callback) {
            return Err(ProviderError::new(
                Some(ProviderError::UNSUPPORTED_METHOD),
                "Provider does not support event listeners",
            ));
        }

        Ok(Subscription::new(move || {
            ethereumRemoveListener(lib_wallet::provider::ACCOUNTS_CHANGED, &callback);
            drop(callback);
        }))
    }
}
