//! Show command - display chart information

use chartlet_core::LoadedChart;
use console::style;
use std::path::Path;

use crate::error::Result;

pub fn run(path: &Path, show_values: bool) -> Result<()> {
    let chart = LoadedChart::load(path)?;
    let meta = &chart.metadata;

    println!("{}", style(&meta.name).cyan().bold());
    println!("{}", style("=".repeat(meta.name.len())).dim());
    println!();

    println!("{}: {}", style("Version").bold(), meta.version);

    if let Some(desc) = &meta.description {
        println!("{}: {}", style("Description").bold(), desc);
    }

    if let Some(app_version) = &meta.app_version {
        println!("{}: {}", style("App Version").bold(), app_version);
    }

    if show_values {
        let values = chart.default_values()?;
        let yaml = serde_yaml::to_string(values.inner())?;

        println!();
        println!("{}:", style("Default Values").bold());
        println!("{}", yaml.trim_end());
    }

    Ok(())
}
