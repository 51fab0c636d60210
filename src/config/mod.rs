//! Configuration for csf-index.
//!
//! Settings come from three layers, later layers winning:
//! built-in defaults (or a named preset), a YAML config file, and
//! command-line flags.
//!
//! ```
//! use csf_index::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//! assert!(config.scoring.strict_input);
//! assert!(config.is_valid());
//! ```
//!
//! A `.csf-index.yaml` in the project root might look like:
//!
//! ```yaml
//! scoring:
//!   improvement_limit: 5
//!   min_score: 61
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{ConfigPreset, STRICT_MIN_SCORE};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, OutputConfig, ScoreConfig,
    ScoringConfig,
};
pub use validation::{ConfigError, Validatable, MAX_IMPROVEMENT_LIMIT};

pub use file::{
    default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_config_file_over, load_or_default,
    load_or_preset, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the config file format.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
