//! Chart definition and loading

use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};
use crate::values::Values;

/// Chart metadata from `Chart.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    /// Chart name (required)
    pub name: String,

    /// Chart version (required, SemVer)
    pub version: Version,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Application version
    #[serde(default)]
    pub app_version: Option<String>,
}

/// Chart information used for naming and labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInfo {
    pub name: String,
    pub version: String,
    pub app_version: Option<String>,
}

impl ChartInfo {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            app_version: None,
        }
    }

    pub fn with_app_version(mut self, app_version: &str) -> Self {
        self.app_version = Some(app_version.to_string());
        self
    }
}

impl ChartMetadata {
    /// Parse `Chart.yaml` content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: RawChartMetadata =
            serde_yaml::from_str(content).map_err(|e| CoreError::InvalidChart {
                message: format!("Chart.yaml: {}", e),
            })?;

        Ok(Self {
            name: raw.name,
            version: Version::parse(raw.version.trim())?,
            description: raw.description,
            app_version: raw.app_version,
        })
    }
}

/// `Chart.yaml` as written, before the version is checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChartMetadata {
    name: String,
    version: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    app_version: Option<String>,
}

impl From<&ChartMetadata> for ChartInfo {
    fn from(meta: &ChartMetadata) -> Self {
        Self {
            name: meta.name.clone(),
            version: meta.version.to_string(),
            app_version: meta.app_version.clone(),
        }
    }
}

/// A chart loaded from a directory
#[derive(Debug, Clone)]
pub struct LoadedChart {
    /// Parsed `Chart.yaml`
    pub metadata: ChartMetadata,

    /// Default values file path
    pub values_path: PathBuf,
}

impl LoadedChart {
    /// Load a chart from a directory
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = path.as_ref().to_path_buf();

        if !root.is_dir() {
            return Err(CoreError::ChartNotFound {
                path: root.display().to_string(),
            });
        }

        let chart_file = root.join("Chart.yaml");
        if !chart_file.exists() {
            return Err(CoreError::InvalidChart {
                message: format!("Chart.yaml not found in {}", root.display()),
            });
        }

        let content = std::fs::read_to_string(&chart_file)?;
        let metadata = ChartMetadata::from_yaml(&content)?;

        if metadata.name.trim().is_empty() {
            return Err(CoreError::InvalidChart {
                message: "Chart.yaml: name must not be empty".to_string(),
            });
        }

        let values_path = root.join("values.yaml");
        if !values_path.exists() {
            return Err(CoreError::InvalidChart {
                message: format!("values.yaml not found in {}", root.display()),
            });
        }

        Ok(Self {
            metadata,
            values_path,
        })
    }

    /// Load the chart's default values
    ///
    /// The defaults define the recognized keys, so they must be a non-empty mapping.
    pub fn default_values(&self) -> Result<Values> {
        let values = Values::from_file(&self.values_path)?;

        if !values.inner().is_object() || values.is_empty() {
            return Err(CoreError::InvalidChart {
                message: format!(
                    "{} must be a non-empty mapping",
                    self.values_path.display()
                ),
            });
        }

        Ok(values)
    }

    /// Chart information for rendering
    pub fn info(&self) -> ChartInfo {
        ChartInfo::from(&self.metadata)
    }
}
