//! Template command - render the chart's Ingress locally

use chartlet_core::{LoadedChart, PlatformVersion, ReleaseInfo};
use chartlet_engine::{EngineError, IngressRenderer};
use console::style;
use std::fs;
use std::path::Path;

use super::RenderOptions;
use crate::error::Result;
use crate::util::ValueLayers;

/// File name of the rendered manifest
pub const MANIFEST_NAME: &str = "ingress.yaml";

pub fn run(
    name: &str,
    chart_path: &Path,
    namespace: &str,
    options: &RenderOptions,
    output_dir: Option<&Path>,
    show_values: bool,
) -> Result<()> {
    // Version errors surface before anything is loaded
    let version = PlatformVersion::parse(&options.kube_version).map_err(EngineError::from)?;

    let chart = LoadedChart::load(chart_path)?;
    tracing::debug!(
        chart = %chart.metadata.name,
        version = %chart.metadata.version,
        "loaded chart"
    );

    let values = ValueLayers::load(&chart, &options.values, &options.set)?.resolve();

    if show_values {
        println!("{}", style("# Computed Values").cyan().bold());
        println!("---");
        let computed = serde_yaml::to_string(values.inner())?;
        println!("{}", computed.trim_end());
        println!("---");
        println!();
    }

    let renderer = IngressRenderer::builder(ReleaseInfo::new(name, namespace), chart.info())
        .strict(options.strict)
        .service_name(options.service_name.clone())
        .service_port(options.service_port)
        .build();

    let Some(manifest) = renderer.render(&values, &version)? else {
        tracing::info!("ingress is disabled, no manifest rendered");
        return Ok(());
    };
    let yaml = manifest.to_yaml()?;

    if let Some(output_path) = output_dir {
        fs::create_dir_all(output_path)?;

        let file_path = output_path.join(MANIFEST_NAME);
        fs::write(&file_path, &yaml)?;
        println!("{} {}", style("wrote").green(), file_path.display());
    } else {
        println!("{}", style(format!("# Source: {}", MANIFEST_NAME)).dim());
        println!("---");
        println!("{}", yaml.trim_end());
    }

    Ok(())
}
