//! Site footer

use leptos::prelude::*;
use lib_core::model::presale::SOCIAL_LINKS;

use crate::state::view::{use_view_context, LEGAL_PAGES};

#[component]
pub fn Footer() -> impl IntoView {
    let view_ctx = use_view_context();

    view! {
        <footer class="site-footer">
            <div class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! {
                        <a href=link.url target="_blank" rel="noopener noreferrer">{link.name}</a>
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="legal-links">
                {LEGAL_PAGES
                    .iter()
                    .copied()
                    .map(|page| view! {
                        <button class="nav-link" on:click=move |_| view_ctx.navigate(page)>
                            {page.label()}
                        </button>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </footer>
    }
}
