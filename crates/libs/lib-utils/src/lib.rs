//! # Utilities Library
//!
//! Shared helpers for time, display formatting, and input validation.

pub mod format;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use format::{format_address, format_number, format_usd, short_address};
pub use time::{now_utc, format_time, parse_utc, Clock, SystemClock};
pub use validation::{validate_not_empty, validate_email, validate_solana_address};
