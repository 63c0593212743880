//! Official presale address with copy-to-clipboard

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use lib_utils::format_address;

use crate::services::clipboard::copy_text;
use crate::state::notice::use_notice_context;
use crate::utils::constants::COPY_FEEDBACK_MS;

#[component]
pub fn AddressBox(address: String) -> impl IntoView {
    let notices = use_notice_context();
    let (copied, set_copied) = signal(false);
    let display = format_address(&address, 4, 4);

    let on_copy = move |_| {
        let address = address.clone();
        leptos::task::spawn_local(async move {
            match copy_text(&address).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    let _ = set_copied.try_set(false);
                }
                Err(e) => {
                    log::warn!("Copy failed: {}", e);
                    notices.error("Could not copy the address; please copy it by hand");
                }
            }
        });
    };

    view! {
        <div class="address-box">
            <div class="address-text">
                <span class="address-caption">"Official Presale Address"</span>
                <span class="address-value">{display}</span>
            </div>
            <button class="copy-button" on:click=on_copy>
                {move || if copied.get() { "Copied" } else { "Copy" }}
            </button>
        </div>
    }
}
