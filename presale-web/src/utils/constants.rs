//! Application constants

// UI timings
pub const COUNTDOWN_TICK_MS: u32 = 1000;
pub const NOTICE_DISMISS_MS: u32 = 4000;
pub const COPY_FEEDBACK_MS: u32 = 2000;

// Static assets
pub const LOGO_IMAGE: &str = "/logo.png";
pub const SOLANA_LOGO_IMAGE: &str = "/solana-logo.png";
