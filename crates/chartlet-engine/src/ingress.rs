//! Ingress values as declared in the chart
//!
//! ```yaml
//! ingress:
//!   internal:
//!     enabled: true
//!     className: traefik-v3-internal
//!     annotations: {}
//!     hosts:
//!       - host: bq-mcp-server.snappy.internal
//!         paths:
//!           - path: /
//!             pathType: ImplementationSpecific
//!     tls: []
//! ```

use chartlet_core::Values;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::error::{EngineError, Result};

/// Default location of the ingress block in values
pub const DEFAULT_INGRESS_KEY: &str = "ingress.internal";

/// Path matching modes understood by the API server
pub const PATH_TYPES: &[&str] = &["Exact", "Prefix", "ImplementationSpecific"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressValues {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub class_name: Option<String>,

    #[serde(default)]
    pub annotations: Option<BTreeMap<String, JsonValue>>,

    #[serde(default)]
    pub tls: Option<Vec<TlsValues>>,

    #[serde(default)]
    pub hosts: Option<Vec<HostValues>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TlsValues {
    #[serde(default)]
    pub hosts: Vec<String>,

    #[serde(default)]
    pub secret_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostValues {
    pub host: String,

    #[serde(default)]
    pub paths: Vec<PathValues>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathValues {
    pub path: String,

    #[serde(default)]
    pub path_type: Option<String>,
}

impl IngressValues {
    /// Read the ingress block at `key`
    ///
    /// Returns `None` when the block is absent or not enabled. Nothing below
    /// `enabled` is inspected for a disabled ingress.
    pub fn from_values(values: &Values, key: &str) -> Result<Option<Self>> {
        let Some(block) = values.get(key) else {
            return Ok(None);
        };
        if block.is_null() {
            return Ok(None);
        }
        if !block.is_object() {
            return Err(EngineError::config(key, "expected a mapping"));
        }

        match block.get("enabled") {
            None | Some(JsonValue::Null) | Some(JsonValue::Bool(false)) => return Ok(None),
            Some(JsonValue::Bool(true)) => {}
            Some(other) => {
                return Err(EngineError::config(
                    format!("{}.enabled", key),
                    format!("expected a boolean, got {}", other),
                ));
            }
        }

        let parsed: IngressValues = serde_json::from_value(block.clone())
            .map_err(|e| EngineError::config(key, e.to_string()))?;

        parsed.validate(key)?;
        Ok(Some(parsed))
    }

    /// Configured class name, treating an empty string as unset
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref().filter(|c| !c.is_empty())
    }

    pub fn hosts(&self) -> &[HostValues] {
        self.hosts.as_deref().unwrap_or_default()
    }

    pub fn tls(&self) -> &[TlsValues] {
        self.tls.as_deref().unwrap_or_default()
    }

    /// Annotations as strings; scalar values are stringified
    pub fn string_annotations(&self, key: &str) -> Result<BTreeMap<String, String>> {
        let Some(annotations) = &self.annotations else {
            return Ok(BTreeMap::new());
        };

        annotations
            .iter()
            .map(|(name, value)| {
                let text = match value {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Bool(b) => b.to_string(),
                    JsonValue::Number(n) => n.to_string(),
                    _ => {
                        return Err(EngineError::config(
                            format!("{}.annotations.{}", key, name),
                            "annotation values must be strings",
                        ));
                    }
                };
                Ok((name.clone(), text))
            })
            .collect()
    }

    fn validate(&self, key: &str) -> Result<()> {
        for (i, host) in self.hosts().iter().enumerate() {
            for (j, path) in host.paths.iter().enumerate() {
                let Some(path_type) = &path.path_type else {
                    continue;
                };
                if !PATH_TYPES.contains(&path_type.as_str()) {
                    return Err(EngineError::config(
                        format!("{}.hosts[{}].paths[{}].pathType", key, i, j),
                        format!(
                            "unknown pathType '{}', expected one of {}",
                            path_type,
                            PATH_TYPES.join(", ")
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<Option<IngressValues>> {
        let values = Values::from_yaml(yaml).unwrap();
        IngressValues::from_values(&values, DEFAULT_INGRESS_KEY)
    }

    #[test]
    fn test_absent_block_is_disabled() {
        assert!(parse("replicaCount: 1").unwrap().is_none());
    }

    #[test]
    fn test_disabled_block_is_not_inspected() {
        let parsed = parse(
            r#"
ingress:
  internal:
    enabled: false
    hosts: "not a list"
"#,
        )
        .unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_enabled_must_be_boolean() {
        let err = parse("ingress:\n  internal:\n    enabled: \"yes\"").unwrap_err();
        match err {
            EngineError::ConfigValidation { path, .. } => {
                assert_eq!(path, "ingress.internal.enabled")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_full_block() {
        let parsed = parse(
            r#"
ingress:
  internal:
    enabled: true
    className: ""
    annotations:
      traefik.ingress.kubernetes.io/router.tls: true
      traefik.ingress.kubernetes.io/priority: 10
    hosts:
      - host: bq-mcp-server.snappy.internal
        paths:
          - path: /
            pathType: ImplementationSpecific
          - path: /sse
    tls:
      - secretName: bq-tls
        hosts: [bq-mcp-server.snappy.internal]
"#,
        )
        .unwrap()
        .unwrap();

        assert_eq!(parsed.class_name(), None);
        assert_eq!(parsed.hosts().len(), 1);
        assert_eq!(parsed.hosts()[0].paths[1].path_type, None);
        assert_eq!(parsed.tls()[0].secret_name.as_deref(), Some("bq-tls"));

        let annotations = parsed.string_annotations(DEFAULT_INGRESS_KEY).unwrap();
        assert_eq!(annotations["traefik.ingress.kubernetes.io/router.tls"], "true");
        assert_eq!(annotations["traefik.ingress.kubernetes.io/priority"], "10");
    }

    #[test]
    fn test_null_lists_are_empty() {
        let parsed = parse("ingress:\n  internal:\n    enabled: true\n    hosts: null\n    tls: null")
            .unwrap()
            .unwrap();
        assert!(parsed.hosts().is_empty());
        assert!(parsed.tls().is_empty());
    }

    #[test]
    fn test_unknown_path_type() {
        let err = parse(
            r#"
ingress:
  internal:
    enabled: true
    hosts:
      - host: a.internal
        paths:
          - path: /
            pathType: Regex
"#,
        )
        .unwrap_err();

        match err {
            EngineError::ConfigValidation { path, message } => {
                assert_eq!(path, "ingress.internal.hosts[0].paths[0].pathType");
                assert!(message.contains("Regex"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let err = parse(
            r#"
ingress:
  internal:
    enabled: true
    hosts:
      - host: a.internal
        paths:
          - pathType: Prefix
"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::ConfigValidation { .. }));
    }

    #[test]
    fn test_nested_annotation_rejected() {
        let parsed = parse(
            "ingress:\n  internal:\n    enabled: true\n    annotations:\n      a:\n        b: c",
        )
        .unwrap()
        .unwrap();
        assert!(parsed.string_annotations(DEFAULT_INGRESS_KEY).is_err());
    }
}
