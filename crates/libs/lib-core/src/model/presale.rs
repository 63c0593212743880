//! # Presale Terms
//!
//! Display-ready view over [`Config`]: tier prices, caps, purchase limits and
//! the ways a buyer can pay. Payment is always manual; nothing here moves funds.

use crate::config::Config;
use crate::error::{AppError, Result};
use lib_utils::format::{format_number, format_usd};
use lib_utils::time::format_day_range;

/// QR code image for the Solana receiving address.
pub const SOLANA_QR_IMAGE: &str = "/solana-qr.png";

/// Assets accepted through a connected EVM wallet with manual verification.
pub const EVM_ASSETS: &[&str] = &["ETH", "BNB", "USDT"];

/// A way to pay for the presale.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentMethod {
    /// Send SOL to the official address.
    Solana { address: String, qr_image: &'static str },
    /// ETH / BNB / USDT via wallet connection, verified by hand.
    Evm { assets: &'static [&'static str] },
    /// Announced but not accepted yet.
    Bitcoin,
    /// Interac e-mail money transfer.
    Interac { email: String },
}

impl PaymentMethod {
    pub fn title(&self) -> String {
        match self {
            PaymentMethod::Solana { .. } => "Solana (SOL)".to_string(),
            PaymentMethod::Evm { assets } => assets.join(" / "),
            PaymentMethod::Bitcoin => "Bitcoin (BTC)".to_string(),
            PaymentMethod::Interac { .. } => "Interac Email Money Transfer".to_string(),
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, PaymentMethod::Bitcoin)
    }
}

/// Social channel linked from the footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "Telegram", url: "https://t.me/Badcreditcoin" },
    SocialLink { name: "Instagram", url: "https://www.instagram.com/badcreditcoin" },
    SocialLink { name: "X", url: "https://x.com/Badcreditcoin" },
];

/// Presale terms derived from the configuration.
#[derive(Clone, Debug)]
pub struct PresaleTerms<'a> {
    config: &'a Config,
}

impl<'a> PresaleTerms<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn symbol(&self) -> &str {
        &self.config.token_symbol
    }

    /// `Current: 0.0050 BCC → Next: 0.0055 BCC`
    pub fn tier_label(&self) -> String {
        format!(
            "Current: {} {sym} → Next: {} {sym}",
            format_number(self.config.sale_price, 4),
            format_number(self.config.next_price, 4),
            sym = self.symbol()
        )
    }

    /// `1 BCC = 0.0050`
    pub fn sale_price_label(&self) -> String {
        format!("1 {} = {}", self.symbol(), format_number(self.config.sale_price, 4))
    }

    /// `1 BCC = 0.010`
    pub fn listing_price_label(&self) -> String {
        format!("1 {} = {}", self.symbol(), format_number(self.config.listing_price, 3))
    }

    /// Relative increase from the current tier to the next, in percent.
    pub fn price_increase_percent(&self) -> f64 {
        (self.config.next_price - self.config.sale_price) / self.config.sale_price * 100.0
    }

    pub fn soft_cap_label(&self) -> String {
        format_usd(self.config.soft_cap_usd)
    }

    pub fn hard_cap_label(&self) -> String {
        format_usd(self.config.hard_cap_usd)
    }

    /// `$0 (manual)`: the figure is updated by hand after off-chain confirmation.
    pub fn raised_label(&self) -> String {
        format!("{} (manual)", format_usd(self.config.raised_usd))
    }

    /// Share of the hard cap raised, clamped to `0..=100`.
    pub fn raised_percent(&self) -> f64 {
        if self.config.hard_cap_usd == 0 {
            return 0.0;
        }
        let pct = self.config.raised_usd as f64 / self.config.hard_cap_usd as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    pub fn min_purchase_label(&self) -> String {
        format!("{} SOL", format_number(self.config.min_purchase_sol, 1))
    }

    pub fn max_purchase_label(&self) -> String {
        format!("{} SOL", format_number(self.config.max_purchase_sol, 0))
    }

    /// Whether a SOL amount falls within the per-purchase limits.
    pub fn accepts_sol_amount(&self, sol: f64) -> bool {
        sol >= self.config.min_purchase_sol && sol <= self.config.max_purchase_sol
    }

    /// Parse an amount typed by the buyer and check it against the limits.
    pub fn check_sol_amount(&self, input: &str) -> Result<f64> {
        let input = input.trim();
        let sol: f64 = input
            .parse()
            .map_err(|_| AppError::InvalidInput(format!("\"{}\" is not a SOL amount", input)))?;
        if !sol.is_finite() || !self.accepts_sol_amount(sol) {
            return Err(AppError::InvalidInput(format!(
                "Purchases must be between {} and {}",
                self.min_purchase_label(),
                self.max_purchase_label()
            )));
        }
        Ok(sol)
    }

    /// `Feb 1 – Feb 3, 2026`
    pub fn distribution_window(&self) -> String {
        format_day_range(self.config.distribution_start, self.config.distribution_end)
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Solana {
                address: self.config.sol_address.clone(),
                qr_image: SOLANA_QR_IMAGE,
            },
            PaymentMethod::Evm { assets: EVM_ASSETS },
            PaymentMethod::Bitcoin,
            PaymentMethod::Interac {
                email: self.config.contact_email.clone(),
            },
        ]
    }
}
