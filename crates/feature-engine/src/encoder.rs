//! Patient Record Encoding
//!
//! Scalars pass through (survival rate becomes a fraction). Yes/No answers,
//! gender, MRI result and stage use a reduced one-hot encoding with the
//! baseline dropped; location, histology and every symptom slot keep one
//! column per category. The classifier artifact was trained on exactly this
//! mix, so it must not be normalised.

use crate::features::EncodedFeatureVector;
use patient_record::{
    Gender, MriResult, RawPatientRecord, Symptom, TumorHistology, TumorLocation, TumorStage,
};
use tracing::debug;

const LOCATION_COLUMNS: [(TumorLocation, &str); 3] = [
    (TumorLocation::Occipital, "Location_Occipital"),
    (TumorLocation::Parietal, "Location_Parietal"),
    (TumorLocation::Temporal, "Location_Temporal"),
];

const HISTOLOGY_COLUMNS: [(TumorHistology, &str); 3] = [
    (TumorHistology::Glioblastoma, "Histology_Glioblastoma"),
    (TumorHistology::Medulloblastoma, "Histology_Medulloblastoma"),
    (TumorHistology::Meningioma, "Histology_Meningioma"),
];

// Stage I is the baseline
const STAGE_COLUMNS: [(TumorStage, &str); 3] = [
    (TumorStage::II, "Stage_II"),
    (TumorStage::III, "Stage_III"),
    (TumorStage::IV, "Stage_IV"),
];

const SYMPTOM_COLUMNS: [[(Symptom, &str); 3]; 3] = [
    [
        (Symptom::Nausea, "Symptom_1_Nausea"),
        (Symptom::Seizures, "Symptom_1_Seizures"),
        (Symptom::VisionIssues, "Symptom_1_Vision Issues"),
    ],
    [
        (Symptom::Nausea, "Symptom_2_Nausea"),
        (Symptom::Seizures, "Symptom_2_Seizures"),
        (Symptom::VisionIssues, "Symptom_2_Vision Issues"),
    ],
    [
        (Symptom::Nausea, "Symptom_3_Nausea"),
        (Symptom::Seizures, "Symptom_3_Seizures"),
        (Symptom::VisionIssues, "Symptom_3_Vision Issues"),
    ],
];

fn indicator(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}

fn one_hot<T: PartialEq + Copy>(
    value: T,
    columns: &[(T, &'static str)],
    out: &mut Vec<(&'static str, f64)>,
) {
    out.extend(
        columns
            .iter()
            .map(|&(category, name)| (name, indicator(category == value))),
    );
}

/// Encoder from patient records to classifier feature vectors
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new feature encoder
    pub fn new() -> Self {
        Self
    }

    /// Named columns produced for a record, before schema placement
    pub fn columns(&self, record: &RawPatientRecord) -> Vec<(&'static str, f64)> {
        let mut columns = vec![
            ("Age", record.age as f64),
            ("Tumor_Size", record.tumor_size),
            ("Survival_Rate", record.survival_rate as f64 / 100.0),
            ("Tumor_Growth_Rate", record.tumor_growth_rate),
            ("Gender_Male", indicator(record.gender == Gender::Male)),
            ("Radiation_Treatment_Yes", indicator(record.radiation_treatment.is_yes())),
            ("Surgery_Performed_Yes", indicator(record.surgery_performed.is_yes())),
            ("Chemotherapy_Yes", indicator(record.chemotherapy.is_yes())),
            ("Family_History_Yes", indicator(record.family_history.is_yes())),
            ("Follow_Up_Required_Yes", indicator(record.follow_up_required.is_yes())),
        ];

        one_hot(record.tumor_location, &LOCATION_COLUMNS, &mut columns);
        one_hot(record.tumor_histology, &HISTOLOGY_COLUMNS, &mut columns);
        one_hot(record.tumor_stage, &STAGE_COLUMNS, &mut columns);
        for (symptom, slot) in record.symptoms.iter().zip(&SYMPTOM_COLUMNS) {
            one_hot(*symptom, slot, &mut columns);
        }

        columns.push((
            "MRI_Result_Positive",
            indicator(record.mri_result == MriResult::Positive),
        ));
        columns
    }

    /// Encode a record into the fixed 29-column schema
    pub fn encode(&self, record: &RawPatientRecord) -> EncodedFeatureVector {
        let columns = self.columns(record);
        debug!("Encoding {} produced columns into schema order", columns.len());
        EncodedFeatureVector::from_columns(columns)
    }
}
