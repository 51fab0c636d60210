//! Assessment scoring engine.
//!
//! Maps a set of parameter measurements to a total index, a maturity tier,
//! per-category averages and a ranked list of improvement areas.
//!
//! # Usage
//!
//! ```
//! use csf_index::model::catalog;
//! use csf_index::scoring::ScoringEngine;
//!
//! let assessment = catalog::sample_assessment(7);
//! let result = ScoringEngine::new().compute(&assessment);
//!
//! println!("Index: {:.1} ({})", result.total_score, result.maturity_level);
//! for area in &result.improvement_areas {
//!     println!("- {} {}: +{:.2}", area.measure_id, area.title, area.impact);
//! }
//! ```
//!
//! The engine is pure: it borrows its input and holds no state between
//! calls. Ranking improvement areas re-totals the full set once per
//! candidate, which is quadratic in catalog size.

mod diagnostics;
mod engine;
mod maturity;
mod score;

pub use diagnostics::{inspect, DataQualityIssue, WEIGHTAGE_TOLERANCE};
pub use engine::{
    compute_index, AssessmentResult, CategoryScore, ImprovementArea, ScoringEngine,
    DEFAULT_IMPROVEMENT_LIMIT, SCORING_ENGINE_VERSION,
};
pub use maturity::{MaturityLevel, MaturityTable, MaturityTier};
pub use score::{score, total_score, weighted_score};
