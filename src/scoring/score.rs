//! Per-parameter score functions.

use crate::model::{Parameter, TargetPolicy};

/// Score a single parameter on a 0-100 scale.
///
/// A zero denominator means "no data" and scores 0. Otherwise the measured
/// percentage `numerator / denominator * 100` is mapped through the
/// parameter's [`TargetPolicy`]:
///
/// | Policy | Score |
/// |---|---|
/// | `MaximizeToTarget` | `min(percentage, 100)` |
/// | `MinimizeToZero` | `max(0, 100 - percentage)` |
/// | `SatisfyAtHalf` | `100` once `percentage >= 50`, else `percentage * 2` |
/// | `Unknown` | `0` |
///
/// ```
/// use csf_index::model::Parameter;
/// use csf_index::scoring::score;
///
/// let incidents = Parameter::new(1, "DE.CM.S2", "Infections", 0.0, 10.0)
///     .with_measurement(0.0, 20.0);
/// assert_eq!(score(&incidents), 100.0);
/// ```
#[must_use]
pub fn score(parameter: &Parameter) -> f64 {
    if parameter.denominator == 0.0 {
        return 0.0;
    }

    let percentage = (parameter.numerator / parameter.denominator) * 100.0;

    match parameter.policy() {
        TargetPolicy::MaximizeToTarget => percentage.min(100.0),
        TargetPolicy::MinimizeToZero => (100.0 - percentage).max(0.0),
        TargetPolicy::SatisfyAtHalf => {
            if percentage >= 50.0 {
                100.0
            } else {
                (percentage / 50.0) * 100.0
            }
        }
        TargetPolicy::Unknown(_) => 0.0,
    }
}

/// Contribution of a parameter to the total index.
#[must_use]
pub fn weighted_score(parameter: &Parameter) -> f64 {
    score(parameter) * parameter.weightage / 100.0
}

/// Sum of weighted scores: the basic total index with no maturity,
/// category or improvement analysis.
#[must_use]
pub fn total_score(parameters: &[Parameter]) -> f64 {
    parameters.iter().map(weighted_score).sum()
}
