//! How-to-purchase panel

use leptos::prelude::*;
use lib_core::{core_config, PresaleTerms};

/// Checks a typed SOL amount against the purchase limits.
#[component]
fn AmountCheck() -> impl IntoView {
    let (input, set_input) = signal(String::new());

    let verdict = move || {
        input.with(|value| {
            if value.trim().is_empty() {
                return None;
            }
            let terms = PresaleTerms::new(core_config());
            Some(match terms.check_sol_amount(value) {
                Ok(sol) => ("amount-ok", format!("{} SOL is within the purchase limits", sol)),
                Err(e) => ("amount-error", e.user_message()),
            })
        })
    };

    view! {
        <div class="amount-check">
            <input
                class="field"
                type="text"
                inputmode="decimal"
                placeholder="Amount in SOL"
                prop:value=input
                on:input=move |ev| set_input.set(event_target_value(&ev))
            />
            {move || verdict().map(|(class, text)| view! { <p class=class>{text}</p> })}
        </div>
    }
}

#[component]
pub fn HowToPurchasePage() -> impl IntoView {
    let config = core_config();
    let terms = PresaleTerms::new(config);

    view! {
        <section class="panel">
            <h1>{format!("How to Purchase ${}", terms.symbol())}</h1>

            <h2>"Option 1: Solana (Recommended)"</h2>
            <ol>
                <li>"Install the Phantom Wallet browser extension"</li>
                <li>"Purchase SOL from an exchange (Coinbase, Binance, etc.)"</li>
                <li>"Transfer SOL to your Phantom wallet"</li>
                <li>
                    "Send SOL to our official wallet address:"
                    <p class="mono">{config.sol_address.clone()}</p>
                </li>
                <li>
                    "Minimum: " <strong>{terms.min_purchase_label()}</strong>
                    <br/>
                    "Maximum: " <strong>{terms.max_purchase_label()}</strong> " (anti-whale protection)"
                    <AmountCheck/>
                </li>
                <li>"Email your transaction receipt to: " <strong>{config.contact_email.clone()}</strong></li>
            </ol>

            <h2>"Option 2: Interac Email Money Transfer"</h2>
            <p>"Send payment via Interac to the following email address:"</p>
            <p class="payment-email">{config.contact_email.clone()}</p>
            <p>"After payment, email your receipt so tokens can be allocated before launch."</p>
        </section>
    }
}
