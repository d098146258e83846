//! Record Validator for Range Checking

use crate::error::ValidationError;
use crate::form::{AGE_RANGE, SURVIVAL_RATE_RANGE, TUMOR_GROWTH_RATE_RANGE, TUMOR_SIZE_RANGE};
use crate::record::RawPatientRecord;
use serde::{Deserialize, Serialize};

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Age valid range (years)
    pub age_range: (f64, f64),
    /// Tumor size valid range (cm)
    pub tumor_size_range: (f64, f64),
    /// Survival rate valid range (%)
    pub survival_rate_range: (f64, f64),
    /// Growth rate index valid range
    pub tumor_growth_rate_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: (AGE_RANGE.0 as f64, AGE_RANGE.1 as f64),
            tumor_size_range: TUMOR_SIZE_RANGE,
            survival_rate_range: (SURVIVAL_RATE_RANGE.0 as f64, SURVIVAL_RATE_RANGE.1 as f64),
            tumor_growth_rate_range: TUMOR_GROWTH_RATE_RANGE,
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }

    /// First error, if any
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Numeric domain validator for patient records
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against an inclusive range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
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

    /// Validate age
    pub fn validate_age(&self, age: f64) -> Result<(), ValidationError> {
        self.validate_range("age", age, self.config.age_range)
    }

    /// Validate tumor size
    pub fn validate_tumor_size(&self, size: f64) -> Result<(), ValidationError> {
        self.validate_range("tumor_size", size, self.config.tumor_size_range)
    }

    /// Validate survival rate percentage
    pub fn validate_survival_rate(&self, rate: f64) -> Result<(), ValidationError> {
        self.validate_range("survival_rate", rate, self.config.survival_rate_range)
    }

    /// Validate tumor growth rate
    pub fn validate_tumor_growth_rate(&self, rate: f64) -> Result<(), ValidationError> {
        self.validate_range("tumor_growth_rate", rate, self.config.tumor_growth_rate_range)
    }

    /// Check every numeric field of a record, collecting all violations
    pub fn validate_record(&self, record: &RawPatientRecord) -> ValidationResult {
        let checks = [
            self.validate_age(record.age as f64),
            self.validate_tumor_size(record.tumor_size),
            self.validate_survival_rate(record.survival_rate as f64),
            self.validate_tumor_growth_rate(record.tumor_growth_rate),
        ];
        let fields_checked = checks.len();
        let errors: Vec<_> = checks.into_iter().filter_map(Result::err).collect();

        if errors.is_empty() {
            ValidationResult::valid(fields_checked)
        } else {
            ValidationResult::invalid(errors, fields_checked)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
