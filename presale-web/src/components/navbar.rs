//! Navigation Bar Component

use leptos::prelude::*;
use lib_core::core_config;

use crate::components::WalletButton;
use crate::state::view::{use_view_context, Page, NAV_PAGES};
use crate::utils::constants::LOGO_IMAGE;

#[component]
fn NavLinks() -> impl IntoView {
    let view_ctx = use_view_context();

    NAV_PAGES
        .iter()
        .copied()
        .map(|page| {
            view! {
                <button
                    class=move || if view_ctx.is_current(page) { "nav-link active" } else { "nav-link" }
                    on:click=move |_| view_ctx.navigate(page)
                >
                    {page.label()}
                </button>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let view_ctx = use_view_context();
    let project_name = core_config().project_name.clone();

    view! {
        <header class="site-header">
            <div class="header-inner">
                <button class="brand" on:click=move |_| view_ctx.navigate(Page::Home)>
                    <img src=LOGO_IMAGE alt=format!("{} Logo", project_name) class="brand-logo"/>
                    <span class="brand-name">{project_name.clone()}</span>
                </button>

                <nav class="nav-desktop">
                    <NavLinks/>
                </nav>

                <div class="header-actions">
                    <WalletButton/>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        on:click=move |_| view_ctx.toggle_menu()
                    >
                        {move || if view_ctx.menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {move || view_ctx.menu_open.get().then(|| view! {
                <nav class="nav-mobile">
                    <NavLinks/>
                </nav>
            })}
        </header>
    }
}
