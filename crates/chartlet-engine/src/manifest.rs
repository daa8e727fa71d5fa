//! Rendered Ingress manifest model

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;

/// A rendered Ingress resource
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: IngressSpec,
}

impl ManifestDocument {
    /// Serialize to a YAML document
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize to a JSON value
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectMeta {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    pub labels: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_class_name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tls: Vec<IngressTls>,

    pub rules: Vec<IngressRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressTls {
    pub hosts: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngressRule {
    pub host: String,
    pub http: HttpIngressRuleValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpIngressRuleValue {
    pub paths: Vec<HttpIngressPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpIngressPath {
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_type: Option<String>,

    pub backend: IngressBackend,
}

/// Backend reference, nested for `networking.k8s.io` and flat for `extensions`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IngressBackend {
    Service {
        service: ServiceBackend,
    },
    Legacy {
        #[serde(rename = "serviceName")]
        service_name: String,
        #[serde(rename = "servicePort")]
        service_port: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceBackend {
    pub name: String,
    pub port: ServiceBackendPort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceBackendPort {
    pub number: u16,
}
