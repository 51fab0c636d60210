//! Score command handler.
//!
//! Implements the `score` subcommand: load an assessment file, check it,
//! compute the index and render the result.

use crate::config::{ScoreConfig, Validatable};
use crate::error::CsfIndexError;
use crate::pipeline::{
    exit_codes, load_assessment, should_use_color, validate_assessment, write_output,
    OutputTarget, PipelineError,
};
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use crate::scoring::ScoringEngine;
use anyhow::Result;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: ScoreConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(CsfIndexError::config(messages.join("\n  ")).into());
    }

    let path_label = config.path.display().to_string();
    let assessment = load_assessment(&config.path).map_err(|source| PipelineError::LoadFailed {
        path: path_label.clone(),
        source,
    })?;

    let issues = validate_assessment(&assessment);
    if config.scoring.strict_input && !issues.is_empty() {
        return Err(PipelineError::InvalidInput { issues }.into());
    }
    for issue in &issues {
        tracing::warn!("Input issue: {issue}");
    }

    let engine = ScoringEngine::new().with_improvement_limit(config.scoring.improvement_limit);
    let result = engine.compute(&assessment);

    if !config.behavior.quiet {
        tracing::info!(
            "Scored {} parameters: {:.2} ({})",
            assessment.parameters.len(),
            result.total_score,
            result.maturity_level
        );
    }

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter_with_options(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );
    let report_config = ReportConfig {
        show_parameters: config.output.show_parameters,
        metadata: ReportMetadata::new().with_source(path_label),
    };
    let rendered = reporter
        .generate(&result, &assessment, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;
    write_output(&rendered, &target, config.behavior.quiet)?;

    if let Some(threshold) = config.scoring.min_score {
        if result.total_score < threshold {
            tracing::error!(
                "Index {:.2} is below minimum score {:.2}",
                result.total_score,
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}
