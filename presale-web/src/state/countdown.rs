//! Countdown signal
//!
//! Runs the one-second countdown task for as long as the calling component
//! is mounted.

use chrono::{DateTime, Utc};
use gloo_timers::future::IntervalStream;
use leptos::prelude::*;
use lib_countdown::{countdown_stream, derive, run_countdown, Countdown};
use lib_utils::time::{now_utc, SystemClock};

use crate::utils::constants::COUNTDOWN_TICK_MS;

/// Live countdown to `target`; a target already in the past yields
/// [`Countdown::Ended`] immediately and starts no timer.
pub fn use_countdown(target: DateTime<Utc>) -> ReadSignal<Countdown> {
    let (countdown, set_countdown) = signal(derive(target, now_utc()));
    if countdown.get_untracked().is_ended() {
        return countdown;
    }

    let ticks = Box::pin(IntervalStream::new(COUNTDOWN_TICK_MS));
    let (task, handle) = run_countdown(countdown_stream(target, SystemClock, ticks), move |value| {
        let _ = set_countdown.try_set(value);
    });
    leptos::task::spawn_local(task);

    on_cleanup(move || handle.cancel());
    countdown
}
