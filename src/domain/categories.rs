//! Closed enumerations for the categorical form fields.
//!
//! Each variant carries the exact label shown on the form. Parsing only
//! accepts those labels, so a value outside the enumeration is rejected at the
//! boundary where strings enter and can never reach the encoder.

use crate::utils::error::{Result, RiskError};

macro_rules! categorical_field {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every choice, in the order the form offers them.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|choice| choice.label()).collect()
            }
        }

        // The form preselects the first choice.
        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = RiskError;

            fn from_str(s: &str) -> Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.label() == s)
                    .ok_or_else(|| RiskError::UnknownCategory {
                        field: $field.to_string(),
                        value: s.to_string(),
                        expected: Self::labels().join(", "),
                    })
            }
        }
    };
}

categorical_field! {
    Sex, "sex" {
        Male => "Male",
        Female => "Female",
    }
}

categorical_field! {
    ChestPain, "chest pain type" {
        TypicalAngina => "Typical Angina",
        AtypicalAngina => "Atypical Angina",
        NonAnginalPain => "Non-anginal pain",
        Asymptomatic => "Asymptomatic",
    }
}

categorical_field! {
    /// Fasting blood sugar above 120 mg/dl.
    FastingBloodSugar, "fasting blood sugar" {
        Yes => "Yes",
        No => "No",
    }
}

categorical_field! {
    RestingEcg, "resting ECG" {
        Normal => "Normal",
        StTAbnormality => "ST-T wave abnormality",
        LeftVentricularHypertrophy => "Left ventricular hypertrophy",
    }
}

categorical_field! {
    ExerciseAngina, "exercise induced angina" {
        Yes => "Yes",
        No => "No",
    }
}

categorical_field! {
    /// Slope of the peak exercise ST segment.
    StSlope, "ST slope" {
        Upsloping => "Upsloping",
        Flat => "Flat",
        Downsloping => "Downsloping",
    }
}

categorical_field! {
    /// The "Reversable" spelling is the label the model was fitted against.
    Thalassemia, "thalassemia" {
        Normal => "Normal",
        FixedDefect => "Fixed Defect",
        ReversibleDefect => "Reversable Defect",
    }
}
