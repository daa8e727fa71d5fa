//! Shared helpers for CLI commands

use chartlet_core::{LoadedChart, Values, parse_set_values, resolve};
use std::path::PathBuf;

use crate::error::{CliError, Result};

/// Chart defaults plus the override layers, in precedence order
pub struct ValueLayers {
    pub defaults: Values,
    pub overrides: Vec<Values>,
}

impl ValueLayers {
    /// Load defaults from the chart, then each `-f` file, then `--set` entries
    pub fn load(
        chart: &LoadedChart,
        values_files: &[PathBuf],
        set_values: &[String],
    ) -> Result<Self> {
        let defaults = chart.default_values()?;
        tracing::debug!(path = %chart.values_path.display(), "loaded default values");

        let mut overrides = Vec::with_capacity(values_files.len() + 1);
        for values_file in values_files {
            let file_values = Values::from_file(values_file)
                .map_err(|e| CliError::values_file(values_file, e))?;
            tracing::debug!(path = %values_file.display(), "loaded values file");
            overrides.push(file_values);
        }

        if !set_values.is_empty() {
            overrides.push(parse_set_values(set_values)?);
            tracing::debug!(count = set_values.len(), "applied --set values");
        }

        Ok(Self {
            defaults,
            overrides,
        })
    }

    /// Merge all layers
    pub fn resolve(&self) -> Values {
        resolve(&self.defaults, &self.overrides)
    }

    /// Override keys the chart does not declare
    pub fn unknown_paths(&self) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .overrides
            .iter()
            .flat_map(|layer| layer.unknown_paths(&self.defaults))
            .collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }
}
