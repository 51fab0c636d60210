//! Pipeline stages shared by the CLI handlers.
//!
//! load → validate → score → report. Scoring itself lives in
//! [`crate::scoring`]; this module covers the file and terminal plumbing
//! around it.

mod load;
mod output;
mod validate;

pub use load::{
    assessment_json_schema, load_assessment, load_assessment_str, serialize_assessment,
    AssessmentFormat,
};
pub use output::{should_use_color, write_output, OutputTarget};
pub use validate::{is_valid_measure_id, validate_assessment, InputIssue};

use crate::error::CsfIndexError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an assessment file
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        #[source]
        source: CsfIndexError,
    },

    /// Strict mode rejected questionable input
    #[error("Assessment has {} input issue(s): {}", .issues.len(), summarize(.issues))]
    InvalidInput { issues: Vec<InputIssue> },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

fn summarize(issues: &[InputIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The total index is below the configured minimum score
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
