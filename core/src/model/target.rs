use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target used when the user has never set one.
pub const DEFAULT_TARGET_PERCENTAGE: f64 = 75.0;

/// What the user is aiming for. Mutable at any time, last value wins; the
/// only invariant is that the percentage is a positive number up to 100.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TargetConfig {
    pub target_percentage: f64,
    pub target_date: NaiveDate,
    pub include_historical: bool,
}

impl TargetConfig {
    pub fn new(target_percentage: f64, target_date: NaiveDate) -> Self {
        Self {
            target_percentage,
            target_date,
            include_historical: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_percentage(self.target_percentage)
    }
}

/// Guards every percentage the user can supply. A zero or negative target
/// would otherwise turn the confidence division into Infinity/NaN.
pub fn validate_percentage(pct: f64) -> Result<()> {
    if !pct.is_finite() {
        return Err(Error::invalid("target percentage must be a number"));
    }
    if pct <= 0.0 {
        return Err(Error::invalid("target percentage must be greater than 0"));
    }
    if pct > 100.0 {
        return Err(Error::invalid("target percentage cannot exceed 100"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_percentages_up_to_100() {
        assert!(validate_percentage(0.5).is_ok());
        assert!(validate_percentage(75.0).is_ok());
        assert!(validate_percentage(100.0).is_ok());
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        assert!(validate_percentage(0.0).is_err());
        assert!(validate_percentage(-5.0).is_err());
        assert!(validate_percentage(100.1).is_err());
        assert!(validate_percentage(f64::NAN).is_err());
        assert!(validate_percentage(f64::INFINITY).is_err());
    }
}
