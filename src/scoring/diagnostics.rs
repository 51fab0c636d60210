//! Data-quality signals raised while scoring.
//!
//! None of these change a score. They flag catalog or input problems that a
//! caller may want to surface.

use crate::model::{Parameter, TargetPolicy};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Tolerance when checking that weightages sum to 100.
pub const WEIGHTAGE_TOLERANCE: f64 = 1e-6;

/// A data-quality issue found in the scored parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DataQualityIssue {
    /// Target has no defined scoring policy; the parameter scored 0
    UnknownTarget { measure_id: String, target: f64 },
    /// Denominator is 0; the parameter scored 0
    ZeroDenominator { measure_id: String },
    /// Weightages do not sum to 100
    WeightageSum { total: f64 },
    /// Two or more parameters share an id
    DuplicateId { id: u32 },
}

impl DataQualityIssue {
    /// Whether the issue points at a catalog misconfiguration rather than
    /// incomplete data entry.
    #[must_use]
    pub const fn is_catalog_issue(&self) -> bool {
        !matches!(self, Self::ZeroDenominator { .. })
    }
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTarget { measure_id, target } => {
                write!(f, "{measure_id}: unrecognized target {target}, scored as 0")
            }
            Self::ZeroDenominator { measure_id } => {
                write!(f, "{measure_id}: denominator is 0, scored as 0")
            }
            Self::WeightageSum { total } => {
                write!(f, "weightages sum to {total}, expected 100")
            }
            Self::DuplicateId { id } => write!(f, "parameter id {id} is used more than once"),
        }
    }
}

/// Inspect a parameter set for data-quality issues.
pub fn inspect(parameters: &[Parameter]) -> Vec<DataQualityIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for parameter in parameters {
        if !seen.insert(parameter.id) {
            issues.push(DataQualityIssue::DuplicateId { id: parameter.id });
        }

        if let TargetPolicy::Unknown(target) = parameter.policy() {
            tracing::warn!(
                measure_id = %parameter.measure_id,
                target,
                "unrecognized target value, scoring as 0"
            );
            issues.push(DataQualityIssue::UnknownTarget {
                measure_id: parameter.measure_id.clone(),
                target,
            });
        }

        if parameter.denominator == 0.0 {
            tracing::debug!(measure_id = %parameter.measure_id, "denominator is 0, no data");
            issues.push(DataQualityIssue::ZeroDenominator {
                measure_id: parameter.measure_id.clone(),
            });
        }
    }

    if !parameters.is_empty() {
        let total: f64 = parameters.iter().map(|p| p.weightage).sum();
        if (total - 100.0).abs() > WEIGHTAGE_TOLERANCE {
            tracing::warn!(total, "parameter weightages do not sum to 100");
            issues.push(DataQualityIssue::WeightageSum { total });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(id: u32, measure_id: &str, target: f64, weightage: f64) -> Parameter {
        Parameter::new(id, measure_id, "Test", target, weightage).with_measurement(1.0, 2.0)
    }

    #[test]
    fn test_clean_set_has_no_issues() {
        let parameters = [param(1, "ID.AM.S1", 100.0, 60.0), param(2, "DE.CM.S2", 0.0, 40.0)];
        assert!(inspect(&parameters).is_empty());
    }

    #[test]
    fn test_unknown_target_flagged() {
        let parameters = [param(1, "ID.AM.S1", 75.0, 100.0)];
        let issues = inspect(&parameters);
        assert_eq!(
            issues,
            vec![DataQualityIssue::UnknownTarget {
                measure_id: "ID.AM.S1".to_string(),
                target: 75.0,
            }]
        );
        assert!(issues[0].is_catalog_issue());
    }

    #[test]
    fn test_zero_denominator_flagged() {
        let parameters = [param(1, "ID.AM.S1", 100.0, 100.0).with_measurement(0.0, 0.0)];
        let issues = inspect(&parameters);
        assert!(matches!(issues.as_slice(), [DataQualityIssue::ZeroDenominator { .. }]));
        assert!(!issues[0].is_catalog_issue());
    }

    #[test]
    fn test_weightage_sum_and_duplicates() {
        let parameters = [param(1, "ID.AM.S1", 100.0, 30.0), param(1, "ID.AM.S2", 100.0, 30.0)];
        let issues = inspect(&parameters);
        assert!(issues.contains(&DataQualityIssue::DuplicateId { id: 1 }));
        assert!(issues.contains(&DataQualityIssue::WeightageSum { total: 60.0 }));
    }

    #[test]
    fn test_display() {
        let issue = DataQualityIssue::WeightageSum { total: 90.0 };
        assert_eq!(issue.to_string(), "weightages sum to 90, expected 100");
    }
}
