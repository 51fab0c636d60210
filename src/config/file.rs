//! Configuration file loading and discovery.
//!
//! Config files are YAML documents shaped like [`AppConfig`]; every
//! section and field is optional.

use super::types::{AppConfig, ConfigOverrides};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".csf-index.yaml",
    ".csf-index.yml",
    "csf-index.yaml",
    "csf-index.yml",
];

/// Directory name used under the platform config directory.
const CONFIG_DIR_NAME: &str = "csf-index";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (`~/.config/csf-index/` on Linux)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let mut search_dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        search_dirs.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        search_dirs.push(git_root);
    }
    if let Some(config_dir) = dirs::config_dir() {
        search_dirs.push(config_dir.join(CONFIG_DIR_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        search_dirs.push(home);
    }

    search_dirs.iter().find_map(|dir| find_config_in_dir(dir))
}

/// Path `config init` writes to when no explicit path is given.
#[must_use]
pub fn default_config_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from(CONFIG_FILE_NAMES[0]),
        |dir| dir.join(CONFIG_DIR_NAME).join("csf-index.yaml"),
    )
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Walk up from the current directory looking for a `.git` entry.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    load_config_file_over(path, &AppConfig::default())
}

/// Load a YAML config file layered over `base`.
///
/// Keys present in the file replace the matching values in `base`; keys the
/// file leaves out keep the base value.
pub fn load_config_file_over(
    path: &Path,
    base: &AppConfig,
) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(base.clone());
    }

    let layer: Value = serde_yaml::from_str(&content)?;
    let mut merged = serde_yaml::to_value(base)?;
    overlay(&mut merged, layer);
    Ok(serde_yaml::from_value(merged)?)
}

/// Recursively copy `layer` onto `base`. Mappings merge key by key.
fn overlay(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Mapping(base_map), Value::Mapping(layer_map)) => {
            for (key, value) in layer_map {
                match base_map.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        // `scoring:` with nothing under it
        (Value::Mapping(_), Value::Null) => {}
        (slot, layer) => *slot = layer,
    }
}

/// Load config from a discovered file, or fall back to defaults.
///
/// An unreadable file is logged and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    load_or_preset(explicit_path, &AppConfig::default())
}

/// Load a discovered config file over `base`, or return `base` unchanged.
#[must_use]
pub fn load_or_preset(
    explicit_path: Option<&Path>,
    base: &AppConfig,
) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (base.clone(), None);
    };

    match load_config_file_over(&path, base) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", path.display());
            (config, Some(path))
        }
        Err(e) => {
            tracing::warn!("Failed to load config from {}: {}", path.display(), e);
            (base.clone(), None)
        }
    }
}

// ============================================================================
// Configuration Layering
// ============================================================================

impl AppConfig {
    /// Resolve the effective config: `base` (defaults or a preset), then the
    /// config file, then command-line overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        base: &Self,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_preset(config_path, base);
        config.apply_overrides(overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Render the given config as a YAML file with a short header.
#[must_use]
pub fn generate_example_config(config: &AppConfig) -> String {
    format!(
        "# csf-index configuration\n\
         # Place this file at .csf-index.yaml in your project root or ~/.config/csf-index/\n\n{}",
        serde_yaml::to_string(config).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# csf-index Configuration File
# =============================
#
# Place it at:
#   - .csf-index.yaml in your project root
#   - ~/.config/csf-index/csf-index.yaml for global config
#
# CLI arguments always override file settings.

scoring:
  # Number of improvement areas to report (1-50)
  improvement_limit: 4
  # Exit with code 1 when the total index is below this value (0-100)
  # min_score: 61
  # Reject assessments with input validation issues
  strict_input: false

output:
  # Format: summary, json, yaml
  format: summary
  # Output file path (omit for stdout)
  # file: result.json
  # Disable colored output
  no_color: false
  # Include every parameter's score
  show_parameters: false

behavior:
  # Suppress non-essential output
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
