//! # Countdown
//!
//! Remaining-time derivation for the presale countdown and the cancellable
//! one-second task that keeps it fresh.

pub mod countdown;
pub mod ticker;

pub use countdown::{derive, Countdown, Remaining, ENDED_LABEL};
pub use ticker::{countdown_stream, run_countdown, CountdownHandle};
