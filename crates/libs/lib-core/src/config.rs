//! # Presale Configuration
//!
//! The site has no server, so configuration is compiled in: defaults below,
//! optionally replaced field by field from a `PRESALE_CONFIG_JSON` document,
//! then overridden by the single-value `PRESALE_*` variables present when the
//! wasm bundle is built.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! assert_eq!(config.token_symbol, "BCC");
//! ```
//!
//! Call [`init_config()`] once at startup to apply and validate build-time
//! overrides; without it [`core_config()`] serves the defaults.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::model::tokenomics::{validate_allocations, ALLOCATIONS};
use lib_utils::{format_time, parse_utc, validate_email, validate_not_empty, validate_solana_address};

/// Partial JSON document applied over the defaults, e.g. `{"raised_usd": 125000}`.
pub const CONFIG_JSON_VAR: &str = "PRESALE_CONFIG_JSON";
/// Override for [`Config::countdown_target`] (RFC3339).
pub const COUNTDOWN_TARGET_VAR: &str = "PRESALE_COUNTDOWN_TARGET";
/// Override for [`Config::sol_address`].
pub const SOL_ADDRESS_VAR: &str = "PRESALE_SOL_ADDRESS";
/// Override for [`Config::contact_email`].
pub const CONTACT_EMAIL_VAR: &str = "PRESALE_CONTACT_EMAIL";
/// Override for [`Config::whitepaper_url`].
pub const WHITEPAPER_URL_VAR: &str = "PRESALE_WHITEPAPER_URL";

/// Presale configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project_name: String,
    pub token_symbol: String,

    /// Instant the current price tier ends; drives the presale countdown.
    pub countdown_target: DateTime<Utc>,

    /// Current tier price per token.
    pub sale_price: f64,
    /// Price of the next tier once the countdown ends.
    pub next_price: f64,
    /// Expected exchange listing price.
    pub listing_price: f64,

    pub soft_cap_usd: u64,
    pub hard_cap_usd: u64,
    /// Raised so far; maintained by hand since payments are confirmed off-chain.
    pub raised_usd: u64,

    pub min_purchase_sol: f64,
    /// Anti-whale ceiling per purchase.
    pub max_purchase_sol: f64,

    /// Official receiving address for SOL payments.
    pub sol_address: String,
    /// Interac recipient and receipt address.
    pub contact_email: String,

    pub distribution_start: NaiveDate,
    pub distribution_end: NaiveDate,

    pub whitepaper_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: "Bad Credit Coin".to_string(),
            token_symbol: "BCC".to_string(),
            countdown_target: Utc
                .with_ymd_and_hms(2026, 2, 1, 0, 0, 0)
                .single()
                .unwrap_or_default(),
            sale_price: 0.0050,
            next_price: 0.0055,
            listing_price: 0.010,
            soft_cap_usd: 500_000,
            hard_cap_usd: 1_000_000,
            raised_usd: 0,
            min_purchase_sol: 0.2,
            max_purchase_sol: 50.0,
            sol_address: "H7GbbP9SGb9VtUVJFXoesnQjcJk1XpXAFHTyMzNx4AaD".to_string(),
            contact_email: "badcreditcoin@gmail.com".to_string(),
            distribution_start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap_or_default(),
            distribution_end: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap_or_default(),
            whitepaper_url: "/Bad-Credit-Coin-Whitepaper.pdf".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the variables baked in at build time.
    pub fn from_build_env() -> Result<Self> {
        Self::from_vars(build_var)
    }

    /// Apply overrides from `lookup` on top of the defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_JSON_VAR) {
            Some(json) => Self::from_json(&json).map_err(|e| {
                AppError::Config(format!("{} is not a valid config document: {}", CONFIG_JSON_VAR, e))
            })?,
            None => Self::default(),
        };

        if let Some(target) = lookup(COUNTDOWN_TARGET_VAR) {
            config.countdown_target = parse_utc(&target).map_err(|_| {
                AppError::Config(format!(
                    "{} must be an RFC3339 timestamp, got {:?}",
                    COUNTDOWN_TARGET_VAR, target
                ))
            })?;
        }
        if let Some(address) = lookup(SOL_ADDRESS_VAR) {
            config.sol_address = address.trim().to_string();
        }
        if let Some(email) = lookup(CONTACT_EMAIL_VAR) {
            config.contact_email = email.trim().to_string();
        }
        if let Some(url) = lookup(WHITEPAPER_URL_VAR) {
            config.whitepaper_url = url.trim().to_string();
        }

        Ok(config)
    }

    /// Parse a complete or partial JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate configuration values against the presale's business rules.
    pub fn validate(&self) -> Result<()> {
        validate_not_empty(&self.project_name, "project_name").map_err(AppError::Config)?;
        validate_not_empty(&self.token_symbol, "token_symbol").map_err(AppError::Config)?;
        validate_not_empty(&self.whitepaper_url, "whitepaper_url").map_err(AppError::Config)?;
        validate_solana_address(&self.sol_address).map_err(AppError::Config)?;
        validate_email(&self.contact_email).map_err(AppError::Config)?;

        if self.sale_price <= 0.0 {
            return Err(AppError::Config("sale_price must be positive".to_string()));
        }
        if self.next_price <= self.sale_price {
            return Err(AppError::Config(format!(
                "next_price ({}) must be above sale_price ({})",
                self.next_price, self.sale_price
            )));
        }
        if self.soft_cap_usd > self.hard_cap_usd {
            return Err(AppError::Config(format!(
                "soft_cap_usd ({}) cannot exceed hard_cap_usd ({})",
                self.soft_cap_usd, self.hard_cap_usd
            )));
        }
        if self.min_purchase_sol <= 0.0 || self.min_purchase_sol >= self.max_purchase_sol {
            return Err(AppError::Config(format!(
                "purchase limits must satisfy 0 < min ({}) < max ({})",
                self.min_purchase_sol, self.max_purchase_sol
            )));
        }
        if self.distribution_start > self.distribution_end {
            return Err(AppError::Config(
                "distribution_start must not be after distribution_end".to_string(),
            ));
        }

        Ok(())
    }
}

fn build_var(key: &str) -> Option<String> {
    let value = match key {
        CONFIG_JSON_VAR => option_env!("PRESALE_CONFIG_JSON"),
        COUNTDOWN_TARGET_VAR => option_env!("PRESALE_COUNTDOWN_TARGET"),
        SOL_ADDRESS_VAR => option_env!("PRESALE_SOL_ADDRESS"),
        CONTACT_EMAIL_VAR => option_env!("PRESALE_CONTACT_EMAIL"),
        WHITEPAPER_URL_VAR => option_env!("PRESALE_WHITEPAPER_URL"),
        _ => None,
    };
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - A build-time override cannot be parsed
/// - Configuration validation fails
/// - The published token allocations do not cover the supply
/// - Config has already been initialized
pub fn init_config() -> Result<()> {
    let config = Config::from_build_env()?;
    config.validate()?;
    validate_allocations(ALLOCATIONS)?;

    log::info!(
        "Presale config loaded: {} ({}), countdown target {}",
        config.project_name,
        config.token_symbol,
        format_time(config.countdown_target)
    );

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration, falling back to the
/// defaults when [`init_config()`] has not succeeded.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.countdown_target.to_rfc3339(), "2026-02-01T00:00:00+00:00");
        assert_eq!(config.soft_cap_usd, 500_000);
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = Config::from_vars(lookup(&[
            (COUNTDOWN_TARGET_VAR, "2027-03-01T12:00:00Z"),
            (CONTACT_EMAIL_VAR, " presale@example.org "),
        ]))
        .unwrap();

        assert_eq!(config.countdown_target.to_rfc3339(), "2027-03-01T12:00:00+00:00");
        assert_eq!(config.contact_email, "presale@example.org");
        assert_eq!(config.sol_address, Config::default().sol_address);
    }

    #[test]
    fn test_from_vars_bad_timestamp() {
        let err = Config::from_vars(lookup(&[(COUNTDOWN_TARGET_VAR, "soon")])).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains(COUNTDOWN_TARGET_VAR)));
    }

    #[test]
    fn test_validate_rejects_bad_address() {
        let config = Config::from_vars(lookup(&[(SOL_ADDRESS_VAR, "0xABC")])).unwrap();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let config = Config {
            min_purchase_sol: 50.0,
            max_purchase_sol: 0.2,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            soft_cap_usd: 2_000_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            next_price: 0.0050,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{ "raised_usd": 125000, "token_symbol": "XBCC" }"#).unwrap();
        assert_eq!(config.raised_usd, 125_000);
        assert_eq!(config.token_symbol, "XBCC");
        assert_eq!(config.hard_cap_usd, 1_000_000);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            Config::from_json("{ raised_usd: }"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_from_vars_json_document_then_overrides() {
        let config = Config::from_vars(lookup(&[
            (CONFIG_JSON_VAR, r#"{ "raised_usd": 125000, "contact_email": "json@example.org" }"#),
            (CONTACT_EMAIL_VAR, "presale@example.org"),
        ]))
        .unwrap();

        assert_eq!(config.raised_usd, 125_000);
        assert_eq!(config.contact_email, "presale@example.org");
        assert_eq!(config.soft_cap_usd, 500_000);
    }

    #[test]
    fn test_from_vars_bad_json_document() {
        let err = Config::from_vars(lookup(&[(CONFIG_JSON_VAR, "{ raised_usd: }")])).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains(CONFIG_JSON_VAR)));
    }

    #[test]
    fn test_core_config_defaults() {
        assert_eq!(core_config().project_name, "Bad Credit Coin");
    }
}
