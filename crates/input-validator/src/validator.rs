//! Raw Input Range Checking

use crate::error::ValidationError;
use feature_row::RawInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Bedrooms valid range
    pub bed_range: (u32, u32),
    /// Bathrooms valid range
    pub bath_range: (u32, u32),
    /// House size valid range (sqft)
    pub sqft_range: (u32, u32),
    /// Lot size valid range (acres)
    pub acre_lot_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            bed_range: (1, 8),
            bath_range: (1, 5),
            sqft_range: (300, 6000),
            acre_lot_range: (0.0, 5.0),
        }
    }
}

/// Result of validating a whole input
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all fields are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validator for raw house attribute inputs
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    fn check_range(
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate bedroom count
    pub fn validate_bed(&self, bed: u32) -> Result<(), ValidationError> {
        let (min, max) = self.config.bed_range;
        Self::check_range("bed", f64::from(bed), (f64::from(min), f64::from(max)))
    }

    /// Validate bathroom count
    pub fn validate_bath(&self, bath: u32) -> Result<(), ValidationError> {
        let (min, max) = self.config.bath_range;
        Self::check_range("bath", f64::from(bath), (f64::from(min), f64::from(max)))
    }

    /// Validate house size
    pub fn validate_sqft(&self, sqft: u32) -> Result<(), ValidationError> {
        let (min, max) = self.config.sqft_range;
        Self::check_range("sqft", f64::from(sqft), (f64::from(min), f64::from(max)))
    }

    /// Validate lot size
    pub fn validate_acre_lot(&self, acre_lot: f64) -> Result<(), ValidationError> {
        Self::check_range("acre_lot", acre_lot, self.config.acre_lot_range)
    }

    /// Validate ZIP shape: five ASCII digits.
    ///
    /// A malformed ZIP is never fatal downstream (the row builder simply
    /// finds no matching one-hot column), but it can never carry signal
    /// either, so the prompt loop asks again.
    pub fn validate_zip(&self, zip: &str) -> Result<(), ValidationError> {
        if zip.len() == 5 && zip.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(ValidationError::MalformedZip(zip.to_string()))
        }
    }

    /// Validate a whole input, collecting every violation.
    pub fn validate(&self, input: &RawInput) -> ValidationResult {
        let checks = [
            self.validate_bed(input.bed),
            self.validate_bath(input.bath),
            self.validate_sqft(input.sqft),
            self.validate_acre_lot(input.acre_lot),
            self.validate_zip(&input.zip_code),
        ];
        let errors: Vec<ValidationError> =
            checks.into_iter().filter_map(Result::err).collect();

        if !errors.is_empty() {
            debug!("input failed validation with {} error(s)", errors.len());
        }
        ValidationResult::from_errors(errors)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bed_bounds() {
        let validator = Validator::default();
        assert!(validator.validate_bed(1).is_ok());
        assert!(validator.validate_bed(8).is_ok());
        assert!(validator.validate_bed(0).is_err());
        assert!(validator.validate_bed(9).is_err());
    }

    #[test]
    fn test_sqft_bounds() {
        let validator = Validator::default();
        assert!(validator.validate_sqft(300).is_ok());
        assert!(validator.validate_sqft(6000).is_ok());
        assert!(validator.validate_sqft(250).is_err());
        assert!(validator.validate_sqft(6050).is_err());
    }

    #[test]
    fn test_acre_lot_bounds() {
        let validator = Validator::default();
        assert!(validator.validate_acre_lot(0.0).is_ok());
        assert!(validator.validate_acre_lot(5.0).is_ok());
        assert!(validator.validate_acre_lot(-0.01).is_err());
        assert!(validator.validate_acre_lot(5.01).is_err());
    }

    #[test]
    fn test_zip_shape() {
        let validator = Validator::default();
        assert!(validator.validate_zip("94582").is_ok());
        assert!(validator.validate_zip("9458").is_err());
        assert!(validator.validate_zip("945821").is_err());
        assert!(validator.validate_zip("94x82").is_err());
        assert!(validator.validate_zip("").is_err());
    }

    #[test]
    fn test_default_input_is_valid() {
        let result = Validator::default().validate(&RawInput::default());
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn prop_in_range_sqft_accepted(sqft in 300u32..=6000) {
            proptest::prop_assert!(Validator::default().validate_sqft(sqft).is_ok());
        }

        #[test]
        fn prop_five_digit_zip_accepted(zip in "[0-9]{5}") {
            proptest::prop_assert!(Validator::default().validate_zip(&zip).is_ok());
        }
    }

    #[test]
    fn test_all_violations_collected() {
        let input = RawInput {
            bed: 0,
            bath: 9,
            sqft: 100,
            acre_lot: 6.0,
            zip_code: "abc".to_string(),
        };
        let result = Validator::default().validate(&input);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 5);
    }
}
