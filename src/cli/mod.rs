//! CLI command handlers.
//!
//! Handlers hold the logic behind each subcommand so it can be tested
//! without going through argument parsing in `main.rs`.

mod catalog;
mod config_cmd;
mod score;

pub use catalog::{catalog_assessment, run_catalog, CatalogConfig};
pub use config_cmd::{describe_config_paths, init_config, run_schema, show_config, SchemaKind};
pub use score::run_score;

// Re-export config types used by handlers
pub use crate::config::ScoreConfig;
