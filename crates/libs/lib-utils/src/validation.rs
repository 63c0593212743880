//! # Validation Utilities
//!
//! Input validation helpers.

/// Length in bytes of a decoded Solana public key.
pub const SOLANA_PUBKEY_LEN: usize = 32;

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(format!("Invalid email format: {}", email)),
    }
}

/// Validate that `address` is base58 and decodes to a 32-byte public key.
pub fn validate_solana_address(address: &str) -> Result<(), String> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| format!("Invalid Solana address {}: {}", address, e))?;

    if bytes.len() != SOLANA_PUBKEY_LEN {
        return Err(format!(
            "Invalid Solana address {}: decodes to {} bytes, expected {}",
            address,
            bytes.len(),
            SOLANA_PUBKEY_LEN
        ));
    }
    Ok(())
}
