//! White paper panel

use leptos::prelude::*;
use lib_core::core_config;

#[component]
pub fn WhitepaperPage() -> impl IntoView {
    let url = core_config().whitepaper_url.clone();

    view! {
        <section class="panel">
            <h2>"White Paper"</h2>
            <p>"Protocol design, roadmap, governance, and economics."</p>
            <a href=url class="btn" download="">"Download PDF"</a>
        </section>
    }
}
