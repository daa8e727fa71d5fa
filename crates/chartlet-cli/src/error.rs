//! CLI error types with exit code handling
//!
//! This module provides a unified error type for CLI operations that
//! maps errors to appropriate exit codes.

use chartlet_core::CoreError;
use chartlet_engine::EngineError;
use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Chart loading or values resolution failed
    #[error(transparent)]
    #[diagnostic(code(chartlet::cli::chart))]
    Core(#[from] CoreError),

    /// A values file could not be read or parsed
    #[error("Failed to load values file: {path}")]
    #[diagnostic(code(chartlet::cli::values))]
    ValuesFile {
        path: String,
        #[source]
        source: CoreError,
    },

    /// Rendering failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] EngineError),

    /// Linting failed with errors
    #[error("Linting failed with {errors} error(s) and {warnings} warning(s)")]
    #[diagnostic(code(chartlet::cli::lint))]
    LintFailed { errors: usize, warnings: usize },

    /// Values could not be printed as YAML
    #[error("Failed to serialize values: {0}")]
    #[diagnostic(code(chartlet::cli::yaml))]
    Yaml(#[from] serde_yaml::Error),

    /// IO error (output directory, permissions, etc.)
    #[error("IO error: {0}")]
    #[diagnostic(code(chartlet::cli::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(err) | CliError::ValuesFile { source: err, .. } => match err {
                CoreError::ChartNotFound { .. }
                | CoreError::InvalidChart { .. }
                | CoreError::InvalidVersion(_) => exit_codes::CHART_ERROR,
                CoreError::Io(_) => exit_codes::IO_ERROR,
                CoreError::YamlParse(_)
                | CoreError::JsonParse(_)
                | CoreError::ValuesMerge { .. } => exit_codes::VALIDATION_ERROR,
            },
            CliError::Render(err) => match err {
                EngineError::ConfigValidation { .. } | EngineError::VersionParse(_) => {
                    exit_codes::VALIDATION_ERROR
                }
                EngineError::SchemaMismatch { .. } => exit_codes::RENDER_ERROR,
                EngineError::Yaml(_) | EngineError::Json(_) => exit_codes::ERROR,
            },
            CliError::LintFailed { .. } | CliError::Yaml(_) => exit_codes::ERROR,
            CliError::Io(_) => exit_codes::IO_ERROR,
        }
    }

    /// Wrap a values file failure with its path
    pub fn values_file(path: &std::path::Path, source: CoreError) -> Self {
        Self::ValuesFile {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
