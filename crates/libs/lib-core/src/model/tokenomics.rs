//! Token supply allocation.

use crate::error::{AppError, Result};

/// One slice of the fixed token supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub label: &'static str,
    pub percent: u8,
}

/// Published allocation of the fixed supply.
pub const ALLOCATIONS: &[Allocation] = &[
    Allocation { label: "Public", percent: 50 },
    Allocation { label: "Lending Pool", percent: 25 },
    Allocation { label: "Team", percent: 10 },
    Allocation { label: "Marketing", percent: 10 },
    Allocation { label: "Reserve", percent: 5 },
];

/// Sum of all allocation percentages.
pub fn total_percent(allocations: &[Allocation]) -> u32 {
    allocations.iter().map(|a| u32::from(a.percent)).sum()
}

/// Check that `allocations` covers exactly the whole supply.
pub fn validate_allocations(allocations: &[Allocation]) -> Result<()> {
    let total = total_percent(allocations);
    if total != 100 {
        return Err(AppError::InvalidInput(format!(
            "Token allocations sum to {}%, expected 100%",
            total
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_allocations_cover_supply() {
        assert_eq!(total_percent(ALLOCATIONS), 100);
        assert!(validate_allocations(ALLOCATIONS).is_ok());
    }

    #[test]
    fn test_validate_allocations_short() {
        let partial = &ALLOCATIONS[..2];
        let err = validate_allocations(partial).unwrap_err();
        assert_eq!(
            err,
            AppError::InvalidInput("Token allocations sum to 75%, expected 100%".to_string())
        );
    }
}
