//! **Scoring engine for cybersecurity framework self-assessments.**
//!
//! `csf-index` turns a set of measured controls into a single 0-100
//! cybersecurity index, a maturity level, per-category scores and a short
//! list of the controls whose improvement would raise the index the most.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Parameter`] measurements grouped into an [`Assessment`], plus the
//!   built-in control [`catalog`](model::catalog).
//! - **[`scoring`]**: the pure scoring functions and the [`ScoringEngine`] that produces an
//!   [`AssessmentResult`]. Scoring never fails; questionable data is reported as
//!   [`DataQualityIssue`]s alongside the result.
//! - **[`pipeline`]**: loading assessment files (JSON or YAML) and validating their contents.
//! - **[`reports`]**: terminal summary and structured JSON/YAML renderers.
//! - **[`config`]**: layered configuration from defaults, presets, YAML files and CLI flags.
//!
//! ## Scoring an Assessment
//!
//! ```
//! use csf_index::{compute_index, MaturityLevel, Parameter};
//!
//! let parameters = vec![
//!     Parameter::new(1, "ID.AM.S1", "Hardware inventory", 100.0, 50.0)
//!         .with_measurement(80.0, 100.0),
//!     Parameter::new(2, "PR.AA.S1", "Shared accounts", 0.0, 50.0)
//!         .with_measurement(2.0, 40.0),
//! ];
//!
//! let result = compute_index(&parameters);
//! assert!((result.total_score - 87.5).abs() < 1e-9);
//! assert_eq!(result.maturity_level, MaturityLevel::Managed);
//! ```
//!
//! ## Loading from a File
//!
//! ```no_run
//! use std::path::Path;
//! use csf_index::{load_assessment, ScoringEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let assessment = load_assessment(Path::new("assessment.yaml"))?;
//!     let result = ScoringEngine::new().compute(&assessment);
//!
//!     println!("Index: {:.2} ({})", result.total_score, result.maturity_level);
//!     for area in &result.improvement_areas {
//!         println!("  {} +{:.2}", area.measure_id, area.impact);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Counts are turned into f64 scores in a few places; catalog sizes are tiny
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use error::{CsfIndexError, ErrorContext, Result};
pub use model::{Assessment, Category, Parameter, TargetPolicy};
pub use pipeline::{load_assessment, load_assessment_str, validate_assessment, InputIssue};
pub use reports::{ReportFormat, ReportGenerator};
pub use scoring::{
    compute_index, score, total_score, weighted_score, AssessmentResult, CategoryScore,
    DataQualityIssue, ImprovementArea, MaturityLevel, ScoringEngine,
};
