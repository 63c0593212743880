//! Countdown grid

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::state::countdown::use_countdown;

/// Days / Hours / Minutes / Seconds cells counting down to `target`.
#[component]
pub fn CountdownGrid(target: DateTime<Utc>) -> impl IntoView {
    let countdown = use_countdown(target);

    view! {
        <div class="countdown" aria-label=move || countdown.get().to_string()>
            {move || {
                countdown
                    .get()
                    .units()
                    .into_iter()
                    .map(|(value, label)| view! {
                        <div class="countdown-cell">
                            <p class="countdown-value">{value}</p>
                            <p class="countdown-label">{label}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
        {move || countdown.get().is_ended().then(|| view! {
            <p class="countdown-ended">{countdown.get().to_string()}</p>
        })}
    }
}
