//! Categorical Attributes
//!
//! Every categorical form field maps to a closed enum. Labels are the strings
//! shown on the form and used in encoded column names.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn same_label(label: &str, value: &str) -> bool {
    let squash = |s: &str| {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect::<Vec<_>>()
    };
    squash(label) == squash(value)
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// All categories in form order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Form label of this category
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parse a form label for the named field.
            ///
            /// Whitespace is ignored anywhere in the value and matching is
            /// ASCII case-insensitive, so `"VisionIssues"` reads as
            /// `"Vision Issues"`.
            pub fn parse_field(field: &'static str, value: &str) -> Result<Self, RecordError> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|category| same_label(category.label(), value))
                    .ok_or_else(|| RecordError::InvalidCategory {
                        field,
                        value: value.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|category| category.label())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_field(stringify!($name), s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

category! {
    /// Patient gender
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

category! {
    /// Answer to a yes/no treatment or history question
    YesNo {
        Yes => "Yes",
        No => "No",
    }
}

category! {
    /// Anatomical location of the tumor
    TumorLocation {
        Occipital => "Occipital",
        Parietal => "Parietal",
        Temporal => "Temporal",
    }
}

category! {
    /// Histological tumor type
    TumorHistology {
        Glioblastoma => "Glioblastoma",
        Medulloblastoma => "Medulloblastoma",
        Meningioma => "Meningioma",
    }
}

category! {
    /// Tumor progression stage
    TumorStage {
        I => "I",
        II => "II",
        III => "III",
        IV => "IV",
    }
}

category! {
    /// Reported symptom
    Symptom {
        Nausea => "Nausea",
        Seizures => "Seizures",
        VisionIssues => "Vision Issues",
    }
}

category! {
    /// MRI scan outcome
    MriResult {
        /// Tumor visible on the scan
        Positive => "Positive",
        Negative => "Negative",
    }
}

impl YesNo {
    /// Whether the answer is `Yes`
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}
