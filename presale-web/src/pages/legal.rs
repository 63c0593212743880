//! Privacy policy and terms

use leptos::prelude::*;
use lib_core::core_config;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let config = core_config();
    let name = format!("{} (${})", config.project_name, config.token_symbol);

    view! {
        <section class="panel">
            <h1>"Privacy Policy"</h1>
            <p>{format!("{} respects your privacy. We do not collect, store, or sell personal information.", name)}</p>
            <p>"Wallet addresses, transaction hashes, and emails (if provided) are used strictly for token distribution and verification purposes."</p>
            <p>"We do not use cookies, tracking pixels, or third-party analytics that compromise user privacy."</p>
            <p>"By using this website, you agree to this privacy policy and terms of service."</p>
        </section>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    let config = core_config();
    let symbol = config.token_symbol.clone();

    view! {
        <section class="panel">
            <h1>"Terms & Conditions"</h1>
            <p>{format!("{} (${}) is a decentralized project. Purchasing tokens carries risk.", config.project_name, symbol)}</p>
            <p>"Tokens purchased during presale are non-refundable."</p>
            <p>{format!("${} does not guarantee profits, price appreciation, or financial returns.", symbol)}</p>
            <p>"By participating, you confirm and agree to comply with your local laws and regulations."</p>
        </section>
    }
}
