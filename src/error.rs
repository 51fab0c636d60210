//! Unified error types for csf-index.
//!
//! The scoring engine itself is total and never fails. These errors cover
//! the layers around it: loading assessment files, configuration and input
//! validation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csf-index operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CsfIndexError {
    /// Errors while loading an assessment
    #[error("Failed to load assessment: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Input validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Unknown assessment format - expected JSON or YAML")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Assessment contains no parameters")]
    EmptyAssessment,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for csf-index operations
pub type Result<T> = std::result::Result<T, CsfIndexError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CsfIndexError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a load error for an unrecognized format
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::load(format!("at {}", path.into()), LoadErrorKind::UnknownFormat)
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CsfIndexError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CsfIndexError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for CsfIndexError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::load(
            "YAML deserialization",
            LoadErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first:
///
/// ```ignore
/// use csf_index::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path).context("reading assessment")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CsfIndexError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: CsfIndexError, new_ctx: &str) -> CsfIndexError {
    match err {
        CsfIndexError::Load {
            context: existing,
            source,
        } => CsfIndexError::Load {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CsfIndexError::Io {
            path,
            message,
            source,
        } => CsfIndexError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CsfIndexError::Config(msg) => CsfIndexError::Config(chain_context(new_ctx, &msg)),
        CsfIndexError::Validation(msg) => CsfIndexError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
