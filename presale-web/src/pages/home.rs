//! Home and mission panels

use leptos::prelude::*;
use lib_core::core_config;

use crate::state::view::{use_view_context, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let view_ctx = use_view_context();
    let project_name = core_config().project_name.clone();

    view! {
        <section class="panel">
            <h1>"Fair Credit. Zero Interest."</h1>
            <p class="lead">
                {format!(
                    "{} is building a decentralized, ethical financial system that enables access to credit without interest, exploitation, or discrimination.",
                    project_name
                )}
            </p>
            <button class="btn" on:click=move |_| view_ctx.navigate(Page::Presale)>
                "Join the Presale"
            </button>
        </section>
    }
}

#[component]
pub fn MissionPage() -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Our Mission"</h2>
            <p>"Financial inclusion, zero-interest lending, trust, and global reach."</p>
        </section>
    }
}
