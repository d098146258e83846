//! Classifier Feature Schema

/// Number of features the classifier consumes
pub const FEATURE_DIMENSION: usize = 29;

/// Column names in the order the classifier was trained on
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "Age",
    "Tumor_Size",
    "Survival_Rate",
    "Tumor_Growth_Rate",
    "Gender_Male",
    "Location_Occipital",
    "Location_Parietal",
    "Location_Temporal",
    "Histology_Glioblastoma",
    "Histology_Medulloblastoma",
    "Histology_Meningioma",
    "Stage_II",
    "Stage_III",
    "Stage_IV",
    "Symptom_1_Nausea",
    "Symptom_1_Seizures",
    "Symptom_1_Vision Issues",
    "Symptom_2_Nausea",
    "Symptom_2_Seizures",
    "Symptom_2_Vision Issues",
    "Symptom_3_Nausea",
    "Symptom_3_Seizures",
    "Symptom_3_Vision Issues",
    "Radiation_Treatment_Yes",
    "Surgery_Performed_Yes",
    "Chemotherapy_Yes",
    "Family_History_Yes",
    "MRI_Result_Positive",
    "Follow_Up_Required_Yes",
];

/// Position of a column in the schema
pub fn index_of(name: &str) -> Option<usize> {
    FEATURE_NAMES.iter().position(|column| *column == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_positions() {
        assert_eq!(index_of("Age"), Some(0));
        assert_eq!(index_of("Stage_II"), Some(11));
        assert_eq!(index_of("Symptom_3_Vision Issues"), Some(22));
        assert_eq!(index_of("Follow_Up_Required_Yes"), Some(FEATURE_DIMENSION - 1));
        assert_eq!(index_of("Stage_I"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, name) in FEATURE_NAMES.iter().enumerate() {
            assert_eq!(index_of(name), Some(i));
        }
    }
}
