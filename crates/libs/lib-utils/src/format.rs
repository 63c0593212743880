//! # Formatting Utilities
//!
//! Number and address formatting used by the presale pages.
//!
//! ## Functions
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_usd`] - Whole-dollar amounts, e.g. `$1,000,000`
//! - [`format_address`] - First N and last M characters with an ellipsis
//! - [`short_address`] - Leading characters only, as shown on the wallet button

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use lib_utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut result: String = grouped.chars().rev().collect();

    if value < 0.0 && value.abs() >= 0.5 * 10f64.powi(-(decimals as i32)) {
        result.insert(0, '-');
    }
    if !decimal_part.is_empty() {
        result.push('.');
        result.push_str(decimal_part);
    }
    result
}

/// Format a whole-dollar amount.
///
/// ```rust
/// use lib_utils::format::format_usd;
///
/// assert_eq!(format_usd(500_000), "$500,000");
/// ```
pub fn format_usd(amount: u64) -> String {
    format!("${}", format_number(amount as f64, 0))
}

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
///
/// ```rust
/// use lib_utils::format::format_address;
///
/// let addr = "H7GbbP9SGb9VtUVJFXoesnQjcJk1XpXAFHTyMzNx4AaD";
/// assert_eq!(format_address(addr, 4, 4), "H7Gb...4AaD");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Keep the first `len` characters and append an ellipsis.
///
/// ```rust
/// use lib_utils::format::short_address;
///
/// assert_eq!(short_address("0x1234567890abcdef", 6), "0x1234...");
/// assert_eq!(short_address("0x12", 6), "0x12");
/// ```
pub fn short_address(address: &str, len: usize) -> String {
    if address.chars().count() <= len {
        return address.to_string();
    }
    let head: String = address.chars().take(len).collect();
    format!("{}...", head)
}
