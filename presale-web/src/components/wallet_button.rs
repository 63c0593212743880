//! Header wallet button

use leptos::prelude::*;
use lib_wallet::ButtonAction;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let action = move || wallet_ctx.wallet.with(|state| state.button_action());

    let on_click = move |_| match action() {
        ButtonAction::Connect => wallet_ctx.connect(),
        ButtonAction::Disconnect => wallet_ctx.disconnect(),
        ButtonAction::Wait => {}
    };

    view! {
        <button
            class=move || if wallet_ctx.is_connected() { "wallet-button connected" } else { "wallet-button" }
            title=move || match wallet_ctx.address() {
                Some(address) => format!("{} (click to disconnect)", address),
                None => String::new(),
            }
            disabled=move || action() == ButtonAction::Wait
            on:click=on_click
        >
            {move || wallet_ctx.button_label()}
        </button>
    }
}
