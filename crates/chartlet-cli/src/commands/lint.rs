//! Lint command - validate a chart and its overrides

use chartlet_core::{LoadedChart, PlatformVersion, ReleaseInfo};
use chartlet_engine::{EngineError, IngressRenderer};
use console::style;
use std::path::Path;

use super::RenderOptions;
use crate::display::LintReport;
use crate::error::{CliError, Result};
use crate::util::ValueLayers;

pub fn run(path: &Path, options: &RenderOptions) -> Result<()> {
    println!("{} Linting chart at {}", style("→").blue(), path.display());

    let mut report = LintReport::new();
    check(path, options, &mut report);
    report.print_summary();

    let (errors, warnings) = report.summary();
    if errors > 0 || (options.strict && warnings > 0) {
        return Err(CliError::LintFailed { errors, warnings });
    }
    Ok(())
}

fn check(path: &Path, options: &RenderOptions, report: &mut LintReport) {
    let chart = match LoadedChart::load(path) {
        Ok(chart) => {
            report.ok(format!(
                "Chart.yaml is valid ({} v{})",
                chart.metadata.name, chart.metadata.version
            ));
            chart
        }
        Err(e) => {
            report.error("", format!("Chart.yaml: {}", e));
            return;
        }
    };

    let version = match PlatformVersion::parse(&options.kube_version) {
        Ok(version) => version,
        Err(e) => {
            report.error("", e.to_string());
            return;
        }
    };

    let layers = match ValueLayers::load(&chart, &options.values, &options.set) {
        Ok(layers) => {
            report.ok("values.yaml is valid");
            layers
        }
        Err(e) => {
            report.error("", e.to_string());
            return;
        }
    };

    for unknown in layers.unknown_paths() {
        report.warning(&unknown, "override key is not declared in values.yaml");
    }

    println!();
    println!(
        "{} Testing render for Kubernetes {}...",
        style("→").blue(),
        version
    );

    let release = ReleaseInfo::new("release-name", "default");
    let renderer = IngressRenderer::builder(release, chart.info())
        .strict(options.strict)
        .service_name(options.service_name.clone())
        .service_port(options.service_port)
        .build();

    match renderer.render(&layers.resolve(), &version) {
        Ok(Some(manifest)) => report.ok(format!(
            "Ingress renders as {} with {} rule(s)",
            manifest.api_version,
            manifest.spec.rules.len()
        )),
        Ok(None) => report.ok("Ingress is disabled, nothing to render"),
        Err(EngineError::ConfigValidation { path, message }) => report.error(&path, message),
        Err(EngineError::SchemaMismatch { path, message, .. }) => report.error(&path, message),
        Err(e) => report.error("", e.to_string()),
    }
}
