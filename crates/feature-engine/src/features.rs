//! Feature Vector Assembly

use crate::error::FeatureError;
use crate::schema::{index_of, FEATURE_DIMENSION, FEATURE_NAMES};
use serde::Serialize;
use tracing::debug;

/// Feature vector for classifier inference.
///
/// Values are always in schema order: the only constructors place columns by
/// name or check names against the schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedFeatureVector {
    /// Feature values in schema order (29 dimensions)
    values: Vec<f64>,
}

impl Default for EncodedFeatureVector {
    fn default() -> Self {
        Self {
            values: vec![0.0; FEATURE_DIMENSION],
        }
    }
}

impl EncodedFeatureVector {
    /// Place named columns into schema order.
    ///
    /// Schema columns that are not supplied stay 0. Supplied columns that the
    /// schema does not know are dropped. A later duplicate overwrites an
    /// earlier one.
    pub fn from_columns<I, N>(columns: I) -> Self
    where
        I: IntoIterator<Item = (N, f64)>,
        N: AsRef<str>,
    {
        let mut vector = Self::default();
        for (name, value) in columns {
            match index_of(name.as_ref()) {
                Some(idx) => vector.values[idx] = value,
                None => debug!("Ignoring column not in schema: {}", name.as_ref()),
            }
        }
        vector
    }

    /// Build from an already ordered column set, rejecting any deviation
    /// from the schema in length or order.
    pub fn from_ordered<N: AsRef<str>>(names: &[N], values: Vec<f64>) -> Result<Self, FeatureError> {
        if names.len() != FEATURE_DIMENSION {
            return Err(FeatureError::ShapeMismatch {
                expected: format!("{} columns", FEATURE_DIMENSION),
                actual: format!("{} columns", names.len()),
            });
        }
        for (position, (expected, found)) in FEATURE_NAMES.iter().zip(names).enumerate() {
            let found: &str = found.as_ref();
            if *expected != found {
                return Err(FeatureError::ShapeMismatch {
                    expected: format!("column {:?} at position {}", expected, position),
                    actual: format!("{:?}", found),
                });
            }
        }

        let vector = Self { values };
        vector.validate_shape()?;
        Ok(vector)
    }

    /// Build from values the caller already holds in schema order.
    ///
    /// Only the length can be checked here; prefer [`from_ordered`] when
    /// column names are available.
    ///
    /// [`from_ordered`]: EncodedFeatureVector::from_ordered
    pub fn from_raw(values: Vec<f64>) -> Result<Self, FeatureError> {
        let vector = Self { values };
        vector.validate_shape()?;
        Ok(vector)
    }

    /// Check the vector has exactly one value per schema column
    pub fn validate_shape(&self) -> Result<(), FeatureError> {
        if self.values.len() != FEATURE_DIMENSION {
            return Err(FeatureError::ShapeMismatch {
                expected: format!("{} values", FEATURE_DIMENSION),
                actual: format!("{} values", self.values.len()),
            });
        }
        Ok(())
    }

    /// Value of a named schema column
    pub fn get(&self, name: &str) -> Option<f64> {
        index_of(name).and_then(|idx| self.values.get(idx).copied())
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Named values in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Single-precision copy for model input
    pub fn as_f32(&self) -> Vec<f32> {
        self.values.iter().map(|&v| v as f32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_default_fills() {
        let vector = EncodedFeatureVector::from_columns([("Age", 30.0), ("Stage_IV", 1.0)]);

        assert_eq!(vector.len(), FEATURE_DIMENSION);
        assert_eq!(vector.get("Age"), Some(30.0));
        assert_eq!(vector.get("Stage_IV"), Some(1.0));
        assert_eq!(vector.values.iter().filter(|v| **v != 0.0).count(), 2);
    }

    #[test]
    fn test_from_columns_ignores_unknown() {
        let vector = EncodedFeatureVector::from_columns(vec![
            ("Stage_I".to_string(), 1.0),
            ("Tumor_Size".to_string(), 2.5),
        ]);
        assert_eq!(vector.values[1], 2.5);
        assert_eq!(vector.values.iter().sum::<f64>(), 2.5);
    }

    #[test]
    fn test_from_ordered_accepts_schema() {
        let values: Vec<f64> = (0..FEATURE_DIMENSION).map(|i| i as f64).collect();
        let vector = EncodedFeatureVector::from_ordered(&FEATURE_NAMES, values.clone()).unwrap();
        assert_eq!(vector.values, values);
    }

    #[test]
    fn test_from_ordered_rejects_swapped_columns() {
        let mut names = FEATURE_NAMES;
        names.swap(5, 6);

        let err = EncodedFeatureVector::from_ordered(&names, vec![0.0; FEATURE_DIMENSION]).unwrap_err();
        let FeatureError::ShapeMismatch { expected, actual } = err;
        assert!(expected.contains("Location_Occipital"));
        assert!(expected.contains("position 5"));
        assert!(actual.contains("Location_Parietal"));
    }

    #[test]
    fn test_from_ordered_rejects_short_schema() {
        let names = &FEATURE_NAMES[..28];
        assert!(EncodedFeatureVector::from_ordered(names, vec![0.0; 28]).is_err());
    }

    #[test]
    fn test_from_ordered_rejects_value_count() {
        assert!(EncodedFeatureVector::from_ordered(&FEATURE_NAMES, vec![0.0; 30]).is_err());
    }

    #[test]
    fn test_validate_shape() {
        assert!(EncodedFeatureVector::default().validate_shape().is_ok());
        assert_eq!(
            EncodedFeatureVector::from_raw(vec![1.0; 12]),
            Err(FeatureError::ShapeMismatch {
                expected: "29 values".to_string(),
                actual: "12 values".to_string(),
            })
        );
        assert!(EncodedFeatureVector::from_raw(vec![1.0; FEATURE_DIMENSION]).is_ok());
    }

    #[test]
    fn test_iter_pairs_names() {
        let vector = EncodedFeatureVector::from_columns([("MRI_Result_Positive", 1.0)]);
        let last_two: Vec<_> = vector.iter().skip(FEATURE_DIMENSION - 2).collect();
        assert_eq!(
            last_two,
            [("MRI_Result_Positive", 1.0), ("Follow_Up_Required_Yes", 0.0)]
        );
    }
}
