//! IPF GL (Goodlift) points.

use super::sex::SexCategory;

/// (A, B, C) for `100 / (A - B * e^(-C * bw))`
const MALE: [f64; 3] = [1199.72839, 1025.18162, 0.00921];
const FEMALE: [f64; 3] = [610.32796, 1045.59282, 0.03048];

fn coefficients(sex: SexCategory) -> &'static [f64; 3] {
    match sex {
        SexCategory::Male => &MALE,
        SexCategory::Female => &FEMALE,
    }
}

/// Multiplier applied to the total at a given bodyweight.
pub fn coefficient(body_weight: f64, sex: SexCategory) -> f64 {
    let [a, b, c] = *coefficients(sex);
    100.0 / (a - b * (-c * body_weight).exp())
}

/// Calculate GL points for a total lifted at a given bodyweight.
///
/// A zero total returns exactly `0.0` whatever the bodyweight. Otherwise
/// nothing is validated and non-finite results are returned unchanged.
pub fn gl(total: f64, body_weight: f64, sex: SexCategory) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    coefficient(body_weight, sex) * total
}
