//! Form Field Definitions
//!
//! Domains, defaults and help text a presentation layer needs to render the
//! prediction form. The numeric domains here are the ranges the
//! [`Validator`](crate::Validator) enforces by default.

use serde::Serialize;

/// Age domain (years)
pub const AGE_RANGE: (u8, u8) = (1, 100);
/// Tumor size domain (cm)
pub const TUMOR_SIZE_RANGE: (f64, f64) = (0.1, 10.0);
/// Survival rate domain (%)
pub const SURVIVAL_RATE_RANGE: (u8, u8) = (0, 100);
/// Tumor growth rate index domain
pub const TUMOR_GROWTH_RATE_RANGE: (f64, f64) = (0.1, 5.0);

pub const DEFAULT_AGE: u8 = 45;
pub const DEFAULT_TUMOR_SIZE: f64 = 3.2;
pub const DEFAULT_SURVIVAL_RATE: u8 = 75;
pub const DEFAULT_TUMOR_GROWTH_RATE: f64 = 1.2;

const YES_NO: &[&str] = &["Yes", "No"];
const SYMPTOMS: &[&str] = &["Nausea", "Seizures", "Vision Issues"];

/// Input kind and domain of a form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Whole number within an inclusive range
    Integer { min: i64, max: i64, default: i64 },
    /// Decimal number within an inclusive range
    Float { min: f64, max: f64, default: f64 },
    /// One label out of a fixed list
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

/// A single form field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldDefinition {
    /// Key used in submitted form input
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Short help text shown under the input
    pub help: &'static str,
    /// Domain and default
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Inclusive numeric range, if this is a numeric field
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.kind {
            FieldKind::Integer { min, max, .. } => Some((min as f64, max as f64)),
            FieldKind::Float { min, max, .. } => Some((min, max)),
            FieldKind::Choice { .. } => None,
        }
    }
}

const fn choice(
    key: &'static str,
    label: &'static str,
    help: &'static str,
    options: &'static [&'static str],
) -> FieldDefinition {
    FieldDefinition {
        key,
        label,
        help,
        kind: FieldKind::Choice {
            options,
            default: options[0],
        },
    }
}

/// All form fields in display order
pub const FORM_FIELDS: [FieldDefinition; 17] = [
    FieldDefinition {
        key: "age",
        label: "Age",
        help: "Age of the patient in years (1-100).",
        kind: FieldKind::Integer {
            min: AGE_RANGE.0 as i64,
            max: AGE_RANGE.1 as i64,
            default: DEFAULT_AGE as i64,
        },
    },
    FieldDefinition {
        key: "tumor_size",
        label: "Tumor Size (cm)",
        help: "Approximate tumor diameter (0.1-10 cm).",
        kind: FieldKind::Float {
            min: TUMOR_SIZE_RANGE.0,
            max: TUMOR_SIZE_RANGE.1,
            default: DEFAULT_TUMOR_SIZE,
        },
    },
    FieldDefinition {
        key: "survival_rate",
        label: "Survival Rate (%)",
        help: "Predicted survival rate percentage (0-100%).",
        kind: FieldKind::Integer {
            min: SURVIVAL_RATE_RANGE.0 as i64,
            max: SURVIVAL_RATE_RANGE.1 as i64,
            default: DEFAULT_SURVIVAL_RATE as i64,
        },
    },
    FieldDefinition {
        key: "tumor_growth_rate",
        label: "Tumor Growth Rate",
        help: "Growth rate index (0.1-5.0) indicating speed of growth.",
        kind: FieldKind::Float {
            min: TUMOR_GROWTH_RATE_RANGE.0,
            max: TUMOR_GROWTH_RATE_RANGE.1,
            default: DEFAULT_TUMOR_GROWTH_RATE,
        },
    },
    choice("gender", "Gender", "Biological gender of the patient.", &["Male", "Female"]),
    choice(
        "radiation_treatment",
        "Radiation Treatment",
        "Has the patient undergone radiation therapy?",
        YES_NO,
    ),
    choice(
        "surgery_performed",
        "Surgery Performed",
        "Was surgery performed?",
        YES_NO,
    ),
    choice(
        "chemotherapy",
        "Chemotherapy",
        "Has the patient received chemotherapy?",
        YES_NO,
    ),
    choice(
        "family_history",
        "Family History",
        "Family history of brain tumors?",
        YES_NO,
    ),
    choice(
        "follow_up_required",
        "Follow Up Required",
        "Is follow-up or additional monitoring required?",
        YES_NO,
    ),
    choice(
        "tumor_location",
        "Tumor Location",
        "Anatomical location of the tumor.",
        &["Occipital", "Parietal", "Temporal"],
    ),
    choice(
        "tumor_histology",
        "Tumor Histology",
        "Tumor type from histological examination.",
        &["Glioblastoma", "Medulloblastoma", "Meningioma"],
    ),
    choice(
        "tumor_stage",
        "Tumor Stage",
        "Tumor stage (I-IV) indicating progression.",
        &["I", "II", "III", "IV"],
    ),
    choice("symptom_1", "Symptom 1", "Primary reported symptom.", SYMPTOMS),
    choice("symptom_2", "Symptom 2", "Secondary reported symptom.", SYMPTOMS),
    choice("symptom_3", "Symptom 3", "Tertiary reported symptom.", SYMPTOMS),
    choice(
        "mri_result",
        "MRI Result",
        "Presence (Positive) or absence (Negative) of tumor on MRI.",
        &["Positive", "Negative"],
    ),
];

/// Look up a field definition by key
pub fn field(key: &str) -> Option<&'static FieldDefinition> {
    FORM_FIELDS.iter().find(|field| field.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, MriResult, Symptom, TumorHistology, TumorLocation, TumorStage, YesNo};

    fn options(key: &str) -> Vec<&'static str> {
        match field(key).map(|f| f.kind) {
            Some(FieldKind::Choice { options, .. }) => options.to_vec(),
            other => panic!("{key} is not a choice field: {other:?}"),
        }
    }

    fn labels<T: Copy>(all: &[T], label: fn(&T) -> &'static str) -> Vec<&'static str> {
        all.iter().map(label).collect()
    }

    #[test]
    fn test_choice_options_match_categories() {
        assert_eq!(options("gender"), labels(Gender::ALL, Gender::label));
        assert_eq!(options("chemotherapy"), labels(YesNo::ALL, YesNo::label));
        assert_eq!(options("tumor_location"), labels(TumorLocation::ALL, TumorLocation::label));
        assert_eq!(options("tumor_histology"), labels(TumorHistology::ALL, TumorHistology::label));
        assert_eq!(options("tumor_stage"), labels(TumorStage::ALL, TumorStage::label));
        assert_eq!(options("symptom_2"), labels(Symptom::ALL, Symptom::label));
        assert_eq!(options("mri_result"), labels(MriResult::ALL, MriResult::label));
    }

    #[test]
    fn test_numeric_ranges() {
        assert_eq!(field("age").and_then(|f| f.range()), Some((1.0, 100.0)));
        assert_eq!(field("tumor_growth_rate").and_then(|f| f.range()), Some((0.1, 5.0)));
        assert_eq!(field("gender").and_then(|f| f.range()), None);
    }

    #[test]
    fn test_keys_are_unique() {
        for (i, a) in FORM_FIELDS.iter().enumerate() {
            assert!(FORM_FIELDS[i + 1..].iter().all(|b| b.key != a.key), "duplicate {}", a.key);
        }
    }

    #[test]
    fn test_choice_default_is_first_option() {
        assert_eq!(
            field("symptom_3").map(|f| f.kind),
            Some(FieldKind::Choice { options: SYMPTOMS, default: "Nausea" })
        );
    }
}
