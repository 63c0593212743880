//! DAO governance placeholder

use leptos::prelude::*;

use crate::state::notice::use_notice_context;

#[component]
pub fn GovernancePage() -> impl IntoView {
    let notices = use_notice_context();
    let vote = move |_| notices.info("Governance voting opens after token distribution");

    view! {
        <section class="panel">
            <h2>"DAO Governance"</h2>
            <div class="vote-buttons">
                <button class="btn" on:click=vote>"Vote YES"</button>
                <button class="btn btn-danger" on:click=vote>"Vote NO"</button>
            </div>
        </section>
    }
}
