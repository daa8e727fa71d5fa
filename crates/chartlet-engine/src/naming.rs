//! Resource naming and standard labels

use chartlet_core::{ChartInfo, ReleaseInfo, Values};
use std::collections::BTreeMap;

/// Kubernetes name length limit (DNS-1123 label)
pub const MAX_NAME_LEN: usize = 63;

pub const MANAGED_BY: &str = "chartlet";

/// Truncate to the DNS label limit and drop a trailing dash
pub fn trunc_name(value: &str) -> String {
    let truncated: String = value.chars().take(MAX_NAME_LEN).collect();
    truncated.trim_end_matches('-').to_string()
}

/// Chart name, honoring `nameOverride`
pub fn name(chart: &ChartInfo, values: &Values) -> String {
    let name = values.get_str("nameOverride").unwrap_or(&chart.name);
    trunc_name(name)
}

/// Release-scoped resource name
///
/// `fullnameOverride` wins; a release name that already contains the chart
/// name is used as is, otherwise `<release>-<name>`.
pub fn fullname(release: &ReleaseInfo, chart: &ChartInfo, values: &Values) -> String {
    if let Some(full) = values.get_str("fullnameOverride") {
        return trunc_name(full);
    }

    let name = values.get_str("nameOverride").unwrap_or(&chart.name);
    if release.name.contains(name) {
        trunc_name(&release.name)
    } else {
        trunc_name(&format!("{}-{}", release.name, name))
    }
}

/// `<name>-<version>` with build metadata made label-safe
pub fn chart_label(chart: &ChartInfo) -> String {
    trunc_name(&format!("{}-{}", chart.name, chart.version).replace('+', "_"))
}

/// Standard chart labels
pub fn labels(
    release: &ReleaseInfo,
    chart: &ChartInfo,
    values: &Values,
) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("helm.sh/chart".to_string(), chart_label(chart));
    labels.insert("app.kubernetes.io/name".to_string(), name(chart, values));
    labels.insert("app.kubernetes.io/instance".to_string(), release.name.clone());
    if let Some(app_version) = chart.app_version.as_deref().filter(|v| !v.is_empty()) {
        labels.insert("app.kubernetes.io/version".to_string(), app_version.to_string());
    }
    labels.insert("app.kubernetes.io/managed-by".to_string(), MANAGED_BY.to_string());
    labels
}
