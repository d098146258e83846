//! Patient Record and Form Input

use crate::category::{Gender, MriResult, Symptom, TumorHistology, TumorLocation, TumorStage, YesNo};
use crate::error::{RecordError, ValidationError};
use crate::form::{DEFAULT_AGE, DEFAULT_SURVIVAL_RATE, DEFAULT_TUMOR_GROWTH_RATE, DEFAULT_TUMOR_SIZE};
use crate::validator::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Patient and tumor attributes for a single prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPatientRecord {
    /// Age in years
    pub age: u8,
    /// Tumor diameter (cm)
    pub tumor_size: f64,
    /// Survival rate percentage
    pub survival_rate: u8,
    /// Growth rate index
    pub tumor_growth_rate: f64,
    pub gender: Gender,
    pub radiation_treatment: YesNo,
    pub surgery_performed: YesNo,
    pub chemotherapy: YesNo,
    pub family_history: YesNo,
    pub follow_up_required: YesNo,
    pub tumor_location: TumorLocation,
    pub tumor_histology: TumorHistology,
    pub tumor_stage: TumorStage,
    /// Primary, secondary and tertiary symptom
    pub symptoms: [Symptom; 3],
    pub mri_result: MriResult,
}

impl Default for RawPatientRecord {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            tumor_size: DEFAULT_TUMOR_SIZE,
            survival_rate: DEFAULT_SURVIVAL_RATE,
            tumor_growth_rate: DEFAULT_TUMOR_GROWTH_RATE,
            gender: Gender::Male,
            radiation_treatment: YesNo::Yes,
            surgery_performed: YesNo::Yes,
            chemotherapy: YesNo::Yes,
            family_history: YesNo::Yes,
            follow_up_required: YesNo::Yes,
            tumor_location: TumorLocation::Occipital,
            tumor_histology: TumorHistology::Glioblastoma,
            tumor_stage: TumorStage::I,
            symptoms: [Symptom::Nausea; 3],
            mri_result: MriResult::Positive,
        }
    }
}

/// Raw form submission.
///
/// Every field is optional and falls back to the form default. Categorical
/// fields carry the form labels as entered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientForm {
    pub age: Option<i64>,
    pub tumor_size: Option<f64>,
    pub survival_rate: Option<i64>,
    pub tumor_growth_rate: Option<f64>,
    pub gender: Option<String>,
    pub radiation_treatment: Option<String>,
    pub surgery_performed: Option<String>,
    pub chemotherapy: Option<String>,
    pub family_history: Option<String>,
    pub follow_up_required: Option<String>,
    pub tumor_location: Option<String>,
    pub tumor_histology: Option<String>,
    pub tumor_stage: Option<String>,
    pub symptom_1: Option<String>,
    pub symptom_2: Option<String>,
    pub symptom_3: Option<String>,
    pub mri_result: Option<String>,
}

fn parse_or<T>(
    value: Option<&str>,
    default: T,
    parse: impl FnOnce(&str) -> Result<T, RecordError>,
) -> Result<T, RecordError> {
    value.map(parse).unwrap_or(Ok(default))
}

fn narrow(field: &'static str, value: i64) -> Result<u8, ValidationError> {
    u8::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field,
        value: value as f64,
        min: u8::MIN as f64,
        max: u8::MAX as f64,
    })
}

impl RawPatientRecord {
    /// Build a record from form input using the default validator
    pub fn from_form(form: &PatientForm) -> Result<Self, RecordError> {
        Self::from_form_with(form, &Validator::default())
    }

    /// Build a record from form input.
    ///
    /// Categorical labels are parsed first, then numbers are narrowed to
    /// their storage type and checked against the validator's domains. The
    /// first problem found is returned.
    pub fn from_form_with(form: &PatientForm, validator: &Validator) -> Result<Self, RecordError> {
        let defaults = Self::default();

        let gender = parse_or(form.gender.as_deref(), defaults.gender, |v| {
            Gender::parse_field("gender", v)
        })?;
        let radiation_treatment = parse_or(
            form.radiation_treatment.as_deref(),
            defaults.radiation_treatment,
            |v| YesNo::parse_field("radiation_treatment", v),
        )?;
        let surgery_performed = parse_or(
            form.surgery_performed.as_deref(),
            defaults.surgery_performed,
            |v| YesNo::parse_field("surgery_performed", v),
        )?;
        let chemotherapy = parse_or(form.chemotherapy.as_deref(), defaults.chemotherapy, |v| {
            YesNo::parse_field("chemotherapy", v)
        })?;
        let family_history = parse_or(
            form.family_history.as_deref(),
            defaults.family_history,
            |v| YesNo::parse_field("family_history", v),
        )?;
        let follow_up_required = parse_or(
            form.follow_up_required.as_deref(),
            defaults.follow_up_required,
            |v| YesNo::parse_field("follow_up_required", v),
        )?;
        let tumor_location = parse_or(
            form.tumor_location.as_deref(),
            defaults.tumor_location,
            |v| TumorLocation::parse_field("tumor_location", v),
        )?;
        let tumor_histology = parse_or(
            form.tumor_histology.as_deref(),
            defaults.tumor_histology,
            |v| TumorHistology::parse_field("tumor_histology", v),
        )?;
        let tumor_stage = parse_or(form.tumor_stage.as_deref(), defaults.tumor_stage, |v| {
            TumorStage::parse_field("tumor_stage", v)
        })?;
        let symptoms = [
            parse_or(form.symptom_1.as_deref(), defaults.symptoms[0], |v| {
                Symptom::parse_field("symptom_1", v)
            })?,
            parse_or(form.symptom_2.as_deref(), defaults.symptoms[1], |v| {
                Symptom::parse_field("symptom_2", v)
            })?,
            parse_or(form.symptom_3.as_deref(), defaults.symptoms[2], |v| {
                Symptom::parse_field("symptom_3", v)
            })?,
        ];
        let mri_result = parse_or(form.mri_result.as_deref(), defaults.mri_result, |v| {
            MriResult::parse_field("mri_result", v)
        })?;

        let age = form.age.unwrap_or(defaults.age as i64);
        let survival_rate = form.survival_rate.unwrap_or(defaults.survival_rate as i64);
        let tumor_size = form.tumor_size.unwrap_or(defaults.tumor_size);
        let tumor_growth_rate = form.tumor_growth_rate.unwrap_or(defaults.tumor_growth_rate);

        let record = Self {
            age: narrow("age", age)?,
            tumor_size,
            survival_rate: narrow("survival_rate", survival_rate)?,
            tumor_growth_rate,
            gender,
            radiation_treatment,
            surgery_performed,
            chemotherapy,
            family_history,
            follow_up_required,
            tumor_location,
            tumor_histology,
            tumor_stage,
            symptoms,
            mri_result,
        };
        validator.validate_record(&record).into_result()?;

        debug!(
            "Parsed patient record: age={}, stage={}, location={}",
            record.age, record.tumor_stage, record.tumor_location
        );
        Ok(record)
    }
}

impl TryFrom<&PatientForm> for RawPatientRecord {
    type Error = RecordError;

    fn try_from(form: &PatientForm) -> Result<Self, Self::Error> {
        Self::from_form(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationConfig;
    use proptest::prelude::*;

    #[test]
    fn test_empty_form_uses_defaults() {
        let record = RawPatientRecord::from_form(&PatientForm::default()).unwrap();
        assert_eq!(record, RawPatientRecord::default());
    }

    #[test]
    fn test_form_from_json() {
        let form: PatientForm = serde_json::from_str(
            r#"{
                "age": 62,
                "tumor_size": 5.5,
                "survival_rate": 40,
                "gender": "Female",
                "tumor_stage": "IV",
                "symptom_2": "Vision Issues",
                "mri_result": "Negative",
                "shoe_size": 44
            }"#,
        )
        .unwrap();

        let record = RawPatientRecord::try_from(&form).unwrap();
        assert_eq!(record.age, 62);
        assert_eq!(record.tumor_size, 5.5);
        assert_eq!(record.survival_rate, 40);
        assert_eq!(record.tumor_growth_rate, DEFAULT_TUMOR_GROWTH_RATE);
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.tumor_stage, TumorStage::IV);
        assert_eq!(
            record.symptoms,
            [Symptom::Nausea, Symptom::VisionIssues, Symptom::Nausea]
        );
        assert_eq!(record.mri_result, MriResult::Negative);
    }

    #[test]
    fn test_invalid_category_names_field() {
        let form = PatientForm {
            symptom_3: Some("Headache".to_string()),
            ..Default::default()
        };

        match RawPatientRecord::from_form(&form) {
            Err(RecordError::InvalidCategory { field, value, .. }) => {
                assert_eq!(field, "symptom_3");
                assert_eq!(value, "Headache");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_age() {
        let form = PatientForm {
            age: Some(130),
            ..Default::default()
        };

        assert!(matches!(
            RawPatientRecord::from_form(&form),
            Err(RecordError::Validation(ValidationError::OutOfRange { field: "age", .. }))
        ));
    }

    #[test]
    fn test_first_numeric_violation_reported() {
        let form = PatientForm {
            tumor_size: Some(f64::NAN),
            tumor_growth_rate: Some(9.0),
            ..Default::default()
        };

        assert_eq!(
            RawPatientRecord::from_form(&form),
            Err(RecordError::Validation(ValidationError::NotFinite { field: "tumor_size" }))
        );
    }

    #[test]
    fn test_age_boundaries_accepted() {
        for age in [1, 100] {
            let form = PatientForm {
                age: Some(age),
                ..Default::default()
            };
            assert_eq!(RawPatientRecord::from_form(&form).unwrap().age as i64, age);
        }
    }

    #[test]
    fn test_relaxed_validator_still_narrows() {
        let validator = Validator::new(ValidationConfig {
            age_range: (0.0, 1000.0),
            ..Default::default()
        });
        let form = PatientForm {
            age: Some(300),
            ..Default::default()
        };

        assert!(matches!(
            RawPatientRecord::from_form_with(&form, &validator),
            Err(RecordError::Validation(ValidationError::OutOfRange { max, .. })) if max == 255.0
        ));
    }

    #[test]
    fn test_record_serializes_form_labels() {
        let record = RawPatientRecord {
            symptoms: [Symptom::Seizures, Symptom::VisionIssues, Symptom::Nausea],
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["symptoms"][1], "Vision Issues");
        assert_eq!(json["tumor_stage"], "I");
    }

    proptest! {
        #[test]
        fn prop_in_domain_numbers_accepted(
            age in 1i64..=100,
            tumor_size in 0.1f64..=10.0,
            survival_rate in 0i64..=100,
            tumor_growth_rate in 0.1f64..=5.0,
        ) {
            let form = PatientForm {
                age: Some(age),
                tumor_size: Some(tumor_size),
                survival_rate: Some(survival_rate),
                tumor_growth_rate: Some(tumor_growth_rate),
                ..Default::default()
            };
            let record = RawPatientRecord::from_form(&form).unwrap();
            prop_assert_eq!(record.age as i64, age);
            prop_assert_eq!(record.survival_rate as i64, survival_rate);
            prop_assert_eq!(record.tumor_size, tumor_size);
            prop_assert_eq!(record.tumor_growth_rate, tumor_growth_rate);
        }

        #[test]
        fn prop_out_of_domain_age_rejected(age in prop_oneof![i64::MIN..1, 101i64..]) {
            let form = PatientForm {
                age: Some(age),
                ..Default::default()
            };
            let rejected = matches!(
                RawPatientRecord::from_form(&form),
                Err(RecordError::Validation(ValidationError::OutOfRange { field: "age", .. }))
            );
            prop_assert!(rejected);
        }
    }
}
