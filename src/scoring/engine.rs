//! Aggregate index computation.
//!
//! Combines per-parameter scores into the total index, looks up the maturity
//! tier, averages scores per category and simulates the gain from bringing
//! each under-target parameter to its target.

use crate::model::{Assessment, Parameter};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::diagnostics::{self, DataQualityIssue};
use super::maturity::{MaturityLevel, MaturityTable};
use super::score::{score, total_score, weighted_score};

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Number of improvement areas returned by default.
pub const DEFAULT_IMPROVEMENT_LIMIT: usize = 4;

/// Weighted average score for one top-level category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Category name (framework category text before the first `:`)
    pub category: String,
    /// Weightage-weighted average of member scores (0-100)
    pub score: f64,
    /// Sum of member weightages
    pub total_weightage: f64,
    /// Number of member parameters
    pub parameter_count: usize,
}

/// A parameter whose improvement to target would raise the total index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementArea {
    pub measure_id: String,
    pub title: String,
    /// Score before improvement (0-100)
    pub current_score: f64,
    /// Gain in total index if the parameter met its target
    pub impact: f64,
}

/// Outcome of scoring one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[must_use]
pub struct AssessmentResult {
    pub scoring_engine_version: String,
    /// Weighted sum of parameter scores (0-100)
    pub total_score: f64,
    pub maturity_level: MaturityLevel,
    pub maturity_description: String,
    /// Per-category averages in first-seen order
    pub category_scores: Vec<CategoryScore>,
    /// Highest-impact improvements, descending
    pub improvement_areas: Vec<ImprovementArea>,
    /// Data-quality signals; empty for a clean catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<DataQualityIssue>,
}

impl AssessmentResult {
    /// Score for a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|c| c.category == name)
    }
}

/// Stateless scoring engine.
///
/// Safe to share across threads and call repeatedly; every call derives its
/// result from the input slice alone.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    improvement_limit: usize,
    maturity_table: MaturityTable,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            improvement_limit: DEFAULT_IMPROVEMENT_LIMIT,
            maturity_table: MaturityTable::standard(),
        }
    }

    /// Set how many improvement areas to keep.
    #[must_use]
    pub const fn with_improvement_limit(mut self, limit: usize) -> Self {
        self.improvement_limit = limit;
        self
    }

    #[must_use]
    pub const fn improvement_limit(&self) -> usize {
        self.improvement_limit
    }

    #[must_use]
    pub const fn maturity_table(&self) -> &MaturityTable {
        &self.maturity_table
    }

    /// Score an assessment.
    pub fn compute(&self, assessment: &Assessment) -> AssessmentResult {
        self.compute_index(&assessment.parameters)
    }

    /// Score a parameter set.
    pub fn compute_index(&self, parameters: &[Parameter]) -> AssessmentResult {
        let diagnostics = diagnostics::inspect(parameters);
        let total = total_score(parameters);
        let tier = self.maturity_table.lookup(total);
        let category_scores = category_scores(parameters);
        let improvement_areas = improvement_areas(parameters, total, self.improvement_limit);

        tracing::debug!(
            parameters = parameters.len(),
            total,
            maturity = %tier.level,
            "computed assessment index"
        );

        AssessmentResult {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            total_score: total,
            maturity_level: tier.level,
            maturity_description: tier.level.description().to_string(),
            category_scores,
            improvement_areas,
            diagnostics,
        }
    }
}

/// Score a parameter set with the default engine.
pub fn compute_index(parameters: &[Parameter]) -> AssessmentResult {
    ScoringEngine::new().compute_index(parameters)
}

#[derive(Default)]
struct CategoryTotals {
    weighted_sum: f64,
    weightage: f64,
    count: usize,
}

/// Weightage-weighted average score per category, in first-seen order.
fn category_scores(parameters: &[Parameter]) -> Vec<CategoryScore> {
    let mut totals: IndexMap<&str, CategoryTotals> = IndexMap::new();
    for parameter in parameters {
        let entry = totals.entry(parameter.category_name()).or_default();
        entry.weighted_sum += score(parameter) * parameter.weightage;
        entry.weightage += parameter.weightage;
        entry.count += 1;
    }

    totals
        .into_iter()
        .map(|(category, totals)| CategoryScore {
            category: category.to_string(),
            score: if totals.weightage > 0.0 {
                totals.weighted_sum / totals.weightage
            } else {
                0.0
            },
            total_weightage: totals.weightage,
            parameter_count: totals.count,
        })
        .collect()
}

/// Rank parameters by the total-index gain of meeting their target.
///
/// Parameters already at or above target are skipped. Each candidate is
/// evaluated against a hypothetical set where only its numerator changes to
/// `denominator * target / 100`.
fn improvement_areas(parameters: &[Parameter], total: f64, limit: usize) -> Vec<ImprovementArea> {
    let mut areas: Vec<ImprovementArea> = parameters
        .iter()
        .enumerate()
        .filter_map(|(index, parameter)| {
            let current_score = score(parameter);
            let gap = (parameter.target - current_score).max(0.0);
            if gap <= 0.0 {
                return None;
            }

            let improved = parameter.at_target();
            let hypothetical_total: f64 = parameters
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    if i == index {
                        weighted_score(&improved)
                    } else {
                        weighted_score(p)
                    }
                })
                .sum();

            Some(ImprovementArea {
                measure_id: parameter.measure_id.clone(),
                title: parameter.title.clone(),
                current_score,
                impact: hypothetical_total - total,
            })
        })
        .collect();

    // Stable: equal impacts keep input order
    areas.sort_by(|a, b| b.impact.partial_cmp(&a.impact).unwrap_or(Ordering::Equal));
    areas.truncate(limit);
    areas
}
