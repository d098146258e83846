//! Patient Record Model
//!
//! Typed patient/tumor attributes as submitted through the prediction form,
//! parsing of raw form input, and domain validation.

mod category;
mod error;
pub mod form;
mod record;
mod validator;

pub use category::{Gender, MriResult, Symptom, TumorHistology, TumorLocation, TumorStage, YesNo};
pub use error::{RecordError, ValidationError};
pub use form::{FieldDefinition, FieldKind, FORM_FIELDS};
pub use record::{PatientForm, RawPatientRecord};
pub use validator::{ValidationConfig, ValidationResult, Validator};
