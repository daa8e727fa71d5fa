//! Engine error types

use chartlet_core::VersionParseError;
use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while rendering a manifest
///
/// Every variant aborts the whole render; no partial manifest is returned.
#[derive(Error, Debug, Diagnostic)]
pub enum EngineError {
    /// A required field is missing or has the wrong shape
    #[error("Invalid configuration at '{path}': {message}")]
    #[diagnostic(
        code(chartlet::render::config),
        help("check the value at this path in your values files or --set flags")
    )]
    ConfigValidation { path: String, message: String },

    /// The target platform version could not be parsed
    #[error(transparent)]
    #[diagnostic(
        code(chartlet::render::version),
        help("use a Kubernetes version such as v1.28.0 or 1.20")
    )]
    VersionParse(#[from] VersionParseError),

    /// The configuration uses a field the selected API variant cannot carry
    #[error("'{path}' is not supported by {api_version} on {platform_version}: {message}")]
    #[diagnostic(
        code(chartlet::render::schema_mismatch),
        help("remove the field or target a newer Kubernetes version; lenient mode drops it")
    )]
    SchemaMismatch {
        path: String,
        api_version: String,
        platform_version: String,
        message: String,
    },

    #[error("YAML error: {0}")]
    #[diagnostic(code(chartlet::render::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(chartlet::render::json))]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub fn config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            path: path.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
