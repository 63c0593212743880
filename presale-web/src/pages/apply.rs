//! Credit application placeholder

use leptos::prelude::*;

const FIELDS: &[&str] = &["Full Name", "Email", "Country", "Wallet Address", "Requested Amount"];

#[component]
pub fn ApplyPage() -> impl IntoView {
    view! {
        <section class="panel">
            <h2>"Apply for Credit"</h2>
            {FIELDS
                .iter()
                .map(|field| view! { <input class="field" placeholder=*field/> })
                .collect::<Vec<_>>()}
        </section>
    }
}
