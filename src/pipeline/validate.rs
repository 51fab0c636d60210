//! Input validation for loaded assessments.
//!
//! The scoring engine accepts any numbers. Values an assessor almost
//! certainly did not mean are reported here instead.

use crate::model::Assessment;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static MEASURE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}\.[A-Z]{2}(\.[A-Z0-9]+)*$").expect("static regex")
});

/// A questionable value in an assessment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputIssue {
    /// Parameter the issue belongs to, empty for assessment-level issues
    pub measure_id: String,
    /// Offending field name
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for InputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure_id.is_empty() {
            write!(f, "{}: {}", self.field, self.message)
        } else {
            write!(f, "{} {}: {}", self.measure_id, self.field, self.message)
        }
    }
}

/// Whether a parameter's `measure_id` looks like `XX.YY` or `XX.YY.Z1`.
#[must_use]
pub fn is_valid_measure_id(measure_id: &str) -> bool {
    MEASURE_ID.is_match(measure_id)
}

/// Check an assessment for values the engine would score but that are
/// probably data-entry mistakes.
#[must_use]
pub fn validate_assessment(assessment: &Assessment) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    if assessment.is_empty() {
        issues.push(InputIssue {
            measure_id: String::new(),
            field: "parameters",
            message: "assessment contains no parameters".to_string(),
        });
        return issues;
    }

    for parameter in &assessment.parameters {
        if !is_valid_measure_id(&parameter.measure_id) {
            issues.push(InputIssue {
                measure_id: parameter.measure_id.clone(),
                field: "measureId",
                message: format!(
                    "'{}' is not a framework measure code such as ID.AM.S1",
                    parameter.measure_id
                ),
            });
        }

        let numbers = [
            ("numerator", parameter.numerator),
            ("denominator", parameter.denominator),
            ("weightage", parameter.weightage),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                issues.push(InputIssue {
                    measure_id: parameter.measure_id.clone(),
                    field,
                    message: format!("{value} is not a finite number"),
                });
            } else if value < 0.0 {
                issues.push(InputIssue {
                    measure_id: parameter.measure_id.clone(),
                    field,
                    message: format!("{value} is negative"),
                });
            }
        }
    }

    issues
}
