//! Handlers for the `config` and `schema` subcommands.

use crate::config::{
    default_config_path, discover_config_file, generate_example_config,
    generate_full_example_config, generate_json_schema, load_or_default, AppConfig, ConfigPreset,
    CONFIG_FILE_NAMES,
};
use crate::pipeline::{assessment_json_schema, write_output, OutputTarget};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Which document the `schema` command describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaKind {
    /// Assessment input files
    #[default]
    Assessment,
    /// `.csf-index.yaml` config files
    Config,
}

/// Print a JSON Schema to stdout or a file.
pub fn run_schema(kind: SchemaKind, output: Option<PathBuf>) -> Result<()> {
    let schema = match kind {
        SchemaKind::Assessment => assessment_json_schema(),
        SchemaKind::Config => generate_json_schema(),
    }
    .context("failed to serialize schema")?;

    write_output(&schema, &OutputTarget::from_option(output), false)
}

/// Render the effective configuration as YAML, with a header naming its source.
pub fn show_config(explicit: Option<&Path>) -> Result<String> {
    let (config, loaded_from) = load_or_default(explicit);
    let header = loaded_from.map_or_else(
        || "# No config file found; showing defaults".to_string(),
        |path| format!("# Loaded from: {}", path.display()),
    );
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    Ok(format!("{header}\n{yaml}"))
}

/// Describe where config files are looked up and which one is active.
#[must_use]
pub fn describe_config_paths(explicit: Option<&Path>) -> String {
    let mut lines = vec!["Config file search paths (in order):".to_string()];
    let search_paths = [
        std::env::current_dir().ok(),
        Some(PathBuf::from("<git repository root>")),
        dirs::config_dir().map(|p| p.join("csf-index")),
        dirs::home_dir(),
    ];
    lines.extend(
        search_paths
            .into_iter()
            .flatten()
            .map(|p| format!("  {}", p.display())),
    );

    lines.push(String::new());
    lines.push("Recognized file names:".to_string());
    lines.extend(CONFIG_FILE_NAMES.iter().map(|name| format!("  {name}")));

    lines.push(String::new());
    lines.push(discover_config_file(explicit).map_or_else(
        || "No config file found.".to_string(),
        |path| format!("Active config file: {}", path.display()),
    ));
    lines.join("\n")
}

/// Write an example config file and return its path.
///
/// With a preset, the file holds that preset's values; otherwise it is the
/// fully commented template. Existing files are never overwritten.
pub fn init_config(target: Option<PathBuf>, preset: Option<ConfigPreset>) -> Result<PathBuf> {
    let target = target.unwrap_or_else(default_config_path);
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let content = match preset {
        Some(preset) => generate_example_config(&AppConfig::from_preset(preset)),
        None => generate_full_example_config(),
    };
    std::fs::write(&target, content)
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!("Created {}", target.display());
    Ok(target)
}
