//! Presale Page - tier pricing, countdown, and payment instructions

use leptos::prelude::*;
use lib_core::{core_config, PaymentMethod, PresaleTerms};
use lib_utils::format_number;

use crate::components::{AddressBox, CountdownGrid};
use crate::state::wallet::use_wallet_context;
use crate::utils::constants::SOLANA_LOGO_IMAGE;

#[component]
fn PaymentMethodCard(method: PaymentMethod) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let title = method.title();

    match method {
        PaymentMethod::Solana { address, qr_image } => view! {
            <div class="payment-card">
                <h3><img src=SOLANA_LOGO_IMAGE class="payment-icon" alt=""/>{title}</h3>
                <p>"Send Solana to the following address"</p>
                <AddressBox address=address/>
                <img src=qr_image alt="Solana QR" class="payment-qr"/>
            </div>
        }
        .into_any(),
        PaymentMethod::Evm { .. } => view! {
            <div class="payment-card">
                <p class="payment-title">{title}</p>
                <p>"Supported via wallet connection (manual verification)."</p>
                <p class="payment-wallet">
                    {move || match (wallet_ctx.address(), wallet_ctx.wallet_name()) {
                        (Some(address), name) => format!("Connected {}: {}", name.unwrap_or("wallet"), address),
                        (None, Some(name)) => format!("Connect {} from the header to pay with these assets.", name),
                        (None, None) => "Install MetaMask to pay with these assets.".to_string(),
                    }}
                </p>
            </div>
        }
        .into_any(),
        PaymentMethod::Bitcoin => view! {
            <div class="payment-card payment-unavailable">
                <p class="payment-title">{title}</p>
                <p>"Coming Soon"</p>
            </div>
        }
        .into_any(),
        PaymentMethod::Interac { email } => view! {
            <div class="payment-card">
                <h3>{title}</h3>
                <p>"Send payment to:"</p>
                <p class="payment-email">{email}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn PresalePage() -> impl IntoView {
    let config = core_config();
    let terms = PresaleTerms::new(config);
    let raised = terms.raised_percent();

    view! {
        <section class="panel presale">
            <h1>"Token Presale"</h1>

            <div class="tier-box">
                <p>"Price will increase in"</p>
                <p class="tier-prices">{terms.tier_label()}</p>
                <p class="tier-increase">
                    {format!("+{}% at the next tier", format_number(terms.price_increase_percent(), 0))}
                </p>
            </div>

            <CountdownGrid target=config.countdown_target/>

            <div class="chain-badge">
                <img src=SOLANA_LOGO_IMAGE alt="Solana"/>
                <p>"Powered by " <strong>"Solana Chain"</strong></p>
            </div>

            <div class="caps">
                <div class="cap"><p class="cap-label">"Soft Cap"</p><p>{terms.soft_cap_label()}</p></div>
                <div class="cap"><p class="cap-label">"Hard Cap"</p><p>{terms.hard_cap_label()}</p></div>
                <div class="cap"><p class="cap-label">"Total Raised"</p><p>{terms.raised_label()}</p></div>
            </div>

            <div class="raised-progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=format_number(raised, 0)>
                <div class="raised-bar" style=format!("width: {:.1}%", raised)></div>
            </div>
            <p class="raised-caption">{format!("{}% of hard cap", format_number(raised, 1))}</p>

            <div class="pricing">
                <p>"Sale Price: " <strong>{terms.sale_price_label()}</strong></p>
                <p>"Listing Price: " <strong>{terms.listing_price_label()}</strong></p>
            </div>

            {terms
                .payment_methods()
                .into_iter()
                .map(|method| view! { <PaymentMethodCard method=method/> })
                .collect::<Vec<_>>()}

            <p>"Tokens distributed between " <strong>{terms.distribution_window()}</strong></p>
            <p>"Email receipt to " <strong>{config.contact_email.clone()}</strong></p>
            <p class="highlight">"Early investors prioritized for zero-interest loans"</p>

            <div class="security">
                <h3>"Smart Contract Security"</h3>
                <p>
                    {format!(
                        "The ${} presale smart contract is currently under internal review and scheduled for third-party security auditing prior to public token distribution.",
                        terms.symbol()
                    )}
                </p>
            </div>
            <p class="audit-badge">"Smart contract audit: " <em>"Coming Soon"</em></p>
        </section>
    }
}
