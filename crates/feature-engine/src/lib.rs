//! Feature Encoding Engine
//!
//! Turns patient records into the fixed-order numeric feature vector the
//! tumor classifier was trained on.

mod encoder;
mod error;
mod features;
mod schema;

pub use encoder::FeatureEncoder;
pub use error::FeatureError;
pub use features::EncodedFeatureVector;
pub use schema::{index_of, FEATURE_DIMENSION, FEATURE_NAMES};
