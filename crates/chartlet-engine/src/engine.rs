//! Ingress renderer

use chartlet_core::{ChartInfo, PlatformVersion, ReleaseInfo, Values};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};
use crate::ingress::{DEFAULT_INGRESS_KEY, IngressValues, PathValues};
use crate::manifest::{
    HttpIngressPath, HttpIngressRuleValue, IngressBackend, IngressRule, IngressSpec, IngressTls,
    ManifestDocument, ObjectMeta, ServiceBackend, ServiceBackendPort,
};
use crate::naming;
use crate::variant::{self, ApiVariant};

/// Annotation read by controllers predating `spec.ingressClassName`
pub const INGRESS_CLASS_ANNOTATION: &str = "kubernetes.io/ingress.class";

/// Values path holding the service port when none is supplied
pub const SERVICE_PORT_KEY: &str = "service.port";

/// Service every path routes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendService {
    pub name: String,
    pub port: u16,
}

/// Renderer builder
pub struct RendererBuilder {
    release: ReleaseInfo,
    chart: ChartInfo,
    strict_mode: bool,
    ingress_key: String,
    service_name: Option<String>,
    service_port: Option<u16>,
}

impl RendererBuilder {
    pub fn new(release: ReleaseInfo, chart: ChartInfo) -> Self {
        Self {
            release,
            chart,
            strict_mode: false,
            ingress_key: DEFAULT_INGRESS_KEY.to_string(),
            service_name: None,
            service_port: None,
        }
    }

    /// Set strict mode (fail instead of dropping fields the target cannot carry)
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }

    /// Dotted values path of the ingress block
    pub fn ingress_key(mut self, key: impl Into<String>) -> Self {
        self.ingress_key = key.into();
        self
    }

    /// Backend service name (defaults to the release fullname)
    pub fn service_name(mut self, name: Option<String>) -> Self {
        self.service_name = name;
        self
    }

    /// Backend service port (defaults to `service.port` from values)
    pub fn service_port(mut self, port: Option<u16>) -> Self {
        self.service_port = port;
        self
    }

    pub fn build(self) -> IngressRenderer {
        IngressRenderer {
            release: self.release,
            chart: self.chart,
            strict_mode: self.strict_mode,
            ingress_key: self.ingress_key,
            service_name: self.service_name,
            service_port: self.service_port,
        }
    }
}

/// Renders the chart's Ingress for a target platform version
pub struct IngressRenderer {
    release: ReleaseInfo,
    chart: ChartInfo,
    strict_mode: bool,
    ingress_key: String,
    service_name: Option<String>,
    service_port: Option<u16>,
}

impl IngressRenderer {
    pub fn builder(release: ReleaseInfo, chart: ChartInfo) -> RendererBuilder {
        RendererBuilder::new(release, chart)
    }

    /// Parse `platform_version` and render
    ///
    /// A malformed version fails before anything else is looked at.
    pub fn render_str(
        &self,
        values: &Values,
        platform_version: &str,
    ) -> Result<Option<ManifestDocument>> {
        let version = PlatformVersion::parse(platform_version)?;
        self.render(values, &version)
    }

    /// Render the Ingress, or `None` when it is not enabled
    pub fn render(
        &self,
        values: &Values,
        version: &PlatformVersion,
    ) -> Result<Option<ManifestDocument>> {
        let Some(ingress) = IngressValues::from_values(values, &self.ingress_key)? else {
            tracing::debug!(key = %self.ingress_key, "ingress disabled, nothing to render");
            return Ok(None);
        };

        let api = ApiVariant::for_version(version);
        let class_fields = variant::has_ingress_class_fields(version);
        tracing::debug!(
            %version,
            api_version = api.api_version(),
            class_fields,
            "selected ingress API"
        );

        let fullname = naming::fullname(&self.release, &self.chart, values);
        let backend = self.backend_service(values, &fullname)?;

        let mut annotations = ingress.string_annotations(&self.ingress_key)?;
        let mut ingress_class_name = None;
        if let Some(class_name) = ingress.class_name() {
            if class_fields {
                ingress_class_name = Some(class_name.to_string());
            } else {
                annotations =
                    with_annotation_if_absent(annotations, INGRESS_CLASS_ANNOTATION, class_name);
            }
        }

        let tls = ingress
            .tls()
            .iter()
            .map(|entry| IngressTls {
                hosts: entry.hosts.clone(),
                secret_name: entry.secret_name.clone(),
            })
            .collect();

        let mut rules = Vec::with_capacity(ingress.hosts().len());
        for (i, host) in ingress.hosts().iter().enumerate() {
            let mut paths = Vec::with_capacity(host.paths.len());
            for (j, path) in host.paths.iter().enumerate() {
                let field = format!("{}.hosts[{}].paths[{}].pathType", self.ingress_key, i, j);
                paths.push(HttpIngressPath {
                    path: path.path.clone(),
                    path_type: self.path_type(path, api, version, &field)?,
                    backend: backend_for(api, &backend),
                });
            }
            rules.push(IngressRule {
                host: host.host.clone(),
                http: HttpIngressRuleValue { paths },
            });
        }

        Ok(Some(ManifestDocument {
            api_version: api.api_version().to_string(),
            kind: "Ingress".to_string(),
            metadata: ObjectMeta {
                name: fullname,
                namespace: Some(self.release.namespace.clone()).filter(|ns| !ns.is_empty()),
                labels: naming::labels(&self.release, &self.chart, values),
                annotations,
            },
            spec: IngressSpec {
                ingress_class_name,
                tls,
                rules,
            },
        }))
    }

    /// `pathType` to emit for a path entry, if any
    fn path_type(
        &self,
        path: &PathValues,
        api: ApiVariant,
        version: &PlatformVersion,
        field: &str,
    ) -> Result<Option<String>> {
        let Some(path_type) = &path.path_type else {
            return Ok(None);
        };

        if api.supports_path_type() && variant::has_ingress_class_fields(version) {
            return Ok(Some(path_type.clone()));
        }

        if self.strict_mode {
            return Err(EngineError::SchemaMismatch {
                path: field.to_string(),
                api_version: api.api_version().to_string(),
                platform_version: version.to_string(),
                message: format!(
                    "pathType requires Kubernetes {} or newer",
                    variant::INGRESS_CLASS_FIELDS_SINCE
                ),
            });
        }

        tracing::warn!(field, %version, "dropping pathType unsupported by target version");
        Ok(None)
    }

    fn backend_service(&self, values: &Values, fullname: &str) -> Result<BackendService> {
        let name = self
            .service_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| fullname.to_string());

        let port = match self.service_port {
            Some(0) => {
                return Err(EngineError::config(
                    SERVICE_PORT_KEY,
                    "expected a port number between 1 and 65535, got 0",
                ));
            }
            Some(port) => port,
            None => port_from_values(values)?,
        };

        Ok(BackendService { name, port })
    }
}

fn port_from_values(values: &Values) -> Result<u16> {
    match values.get(SERVICE_PORT_KEY) {
        None | Some(JsonValue::Null) => Err(EngineError::config(
            SERVICE_PORT_KEY,
            "backend service port is required",
        )),
        Some(value) => value
            .as_u64()
            .and_then(|p| u16::try_from(p).ok())
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                EngineError::config(
                    SERVICE_PORT_KEY,
                    format!("expected a port number between 1 and 65535, got {}", value),
                )
            }),
    }
}

fn backend_for(api: ApiVariant, service: &BackendService) -> IngressBackend {
    if api.uses_service_backend() {
        IngressBackend::Service {
            service: ServiceBackend {
                name: service.name.clone(),
                port: ServiceBackendPort {
                    number: service.port,
                },
            },
        }
    } else {
        IngressBackend::Legacy {
            service_name: service.name.clone(),
            service_port: service.port,
        }
    }
}

/// Insert `key` unless already present; explicit annotations always win
pub fn with_annotation_if_absent(
    mut annotations: BTreeMap<String, String>,
    key: &str,
    value: &str,
) -> BTreeMap<String, String> {
    annotations
        .entry(key.to_string())
        .or_insert_with(|| value.to_string());
    annotations
}
