//! DOTS score: total normalised by a degree-4 polynomial in bodyweight.

use super::sex::SexCategory;

const MALE: [f64; 5] = [
    -307.75076,
    24.0900756,
    -0.1918759221,
    0.0007391293,
    -0.000001093,
];

const FEMALE: [f64; 5] = [
    -57.96288,
    13.6175032,
    -0.1126655495,
    0.0005158568,
    -0.0000010706,
];

fn coefficients(sex: SexCategory) -> &'static [f64; 5] {
    match sex {
        SexCategory::Male => &MALE,
        SexCategory::Female => &FEMALE,
    }
}

/// Sum of `coeff[i] * body_weight^i` for the selected coefficient set.
pub fn denominator(body_weight: f64, sex: SexCategory) -> f64 {
    coefficients(sex)
        .iter()
        .enumerate()
        .map(|(i, c)| c * body_weight.powi(i as i32))
        .sum()
}

/// Calculate the DOTS score for a total lifted at a given bodyweight.
///
/// Inputs are not validated. A zero, negative or non-finite bodyweight is
/// evaluated as-is, so a collapsing denominator yields `NaN` or an infinity
/// which is returned unchanged. Callers must validate before scoring.
pub fn dots(total: f64, body_weight: f64, sex: SexCategory) -> f64 {
    total * (500.0 / denominator(body_weight, sex))
}
