//! Ingress API variant selection

use chartlet_core::PlatformVersion;
use std::fmt;

/// First version serving `networking.k8s.io/v1` Ingress
pub const STABLE_SINCE: PlatformVersion = PlatformVersion::new(1, 19, 0);

/// First version serving `networking.k8s.io/v1beta1` Ingress
pub const BETA_SINCE: PlatformVersion = PlatformVersion::new(1, 14, 0);

/// First version with `pathType` and `ingressClassName`
///
/// Independent from the API group bands: a v1beta1 manifest rendered for
/// 1.18 still carries both fields.
pub const INGRESS_CLASS_FIELDS_SINCE: PlatformVersion = PlatformVersion::new(1, 18, 0);

/// Ingress API shapes, highest band first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVariant {
    /// `networking.k8s.io/v1`
    Stable,
    /// `networking.k8s.io/v1beta1`
    Beta,
    /// `extensions/v1beta1`
    Legacy,
}

impl ApiVariant {
    pub fn for_version(version: &PlatformVersion) -> Self {
        if *version >= STABLE_SINCE {
            Self::Stable
        } else if *version >= BETA_SINCE {
            Self::Beta
        } else {
            Self::Legacy
        }
    }

    pub fn api_version(&self) -> &'static str {
        match self {
            Self::Stable => "networking.k8s.io/v1",
            Self::Beta => "networking.k8s.io/v1beta1",
            Self::Legacy => "extensions/v1beta1",
        }
    }

    /// Whether backends use the nested `service.name`/`service.port.number` form
    pub fn uses_service_backend(&self) -> bool {
        !matches!(self, Self::Legacy)
    }

    /// Whether path entries can carry `pathType` at all
    pub fn supports_path_type(&self) -> bool {
        !matches!(self, Self::Legacy)
    }
}

impl fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_version())
    }
}

/// Whether `pathType` and `ingressClassName` exist on this version
pub fn has_ingress_class_fields(version: &PlatformVersion) -> bool {
    *version >= INGRESS_CLASS_FIELDS_SINCE
}
