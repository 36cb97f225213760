use crate::core::encoding::encode;
use crate::domain::model::{EncodedFeatures, RawInput};

/// Lay out form values in canonical feature order.
///
/// Numeric fields pass through unchanged and categorical fields are replaced
/// by their integer codes. No scaling or imputation: the classifier was
/// fitted on raw-scale inputs.
pub fn build(input: &RawInput) -> EncodedFeatures {
    EncodedFeatures([
        f64::from(input.age),
        encode(input.sex),
        encode(input.chest_pain),
        f64::from(input.resting_bp),
        f64::from(input.cholesterol),
        encode(input.fasting_blood_sugar),
        encode(input.resting_ecg),
        f64::from(input.max_heart_rate),
        encode(input.exercise_angina),
        input.st_depression,
        encode(input.slope),
        f64::from(input.vessel_count),
        encode(input.thalassemia),
    ])
}
