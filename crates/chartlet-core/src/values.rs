//! Values handling with deep merge support

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::Path;

use crate::error::{CoreError, Result};

/// Values container with deep merge capability
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(pub JsonValue);

impl Values {
    /// Create empty values
    pub fn new() -> Self {
        Self(JsonValue::Object(serde_json::Map::new()))
    }

    /// Load values from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse values from YAML string
    ///
    /// An empty document yields empty values rather than `null`.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: JsonValue = serde_yaml::from_str(yaml)?;
        Ok(Self::normalize(value))
    }

    /// Parse values from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Ok(Self::normalize(value))
    }

    fn normalize(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::new(),
            other => Self(other),
        }
    }

    /// Deep merge another Values into this one
    ///
    /// Rules:
    /// - Objects: recursive merge
    /// - Scalars and arrays: overlay replaces base (arrays are never appended)
    /// - `null` in the overlay leaves an existing base value untouched
    pub fn merge(&mut self, overlay: &Values) {
        deep_merge(&mut self.0, &overlay.0);
    }

    /// Set a value by dotted path (e.g., "image.tag")
    pub fn set(&mut self, path: &str, value: JsonValue) -> Result<()> {
        let parts: Vec<&str> = path.split('.').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(CoreError::ValuesMerge {
                message: format!("Invalid values path: '{}'", path),
            });
        }
        set_nested(&mut self.0, &parts, value);
        Ok(())
    }

    /// Get a value by dotted path
    pub fn get(&self, path: &str) -> Option<&JsonValue> {
        let parts: Vec<&str> = path.split('.').collect();
        get_nested(&self.0, &parts)
    }

    /// Get a non-empty string by dotted path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)
            .and_then(JsonValue::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Get the inner JSON value
    pub fn inner(&self) -> &JsonValue {
        &self.0
    }

    /// Convert to JSON value
    pub fn into_inner(self) -> JsonValue {
        self.0
    }

    /// Check if values are empty
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            JsonValue::Object(map) => map.is_empty(),
            JsonValue::Null => true,
            _ => false,
        }
    }

    /// Dotted paths present in these values but not declared by `schema`
    ///
    /// Only non-empty mappings in `schema` are descended into. An empty
    /// mapping (`annotations: {}`) or a scalar accepts anything below it.
    pub fn unknown_paths(&self, schema: &Values) -> Vec<String> {
        let mut unknown = Vec::new();
        collect_unknown(&self.0, &schema.0, "", &mut unknown);
        unknown
    }
}

/// Resolve defaults with overrides applied in order, later ones winning
///
/// Keys absent from the defaults are kept and reported as warnings.
pub fn resolve(defaults: &Values, overrides: &[Values]) -> Values {
    let mut resolved = defaults.clone();

    for (layer, overlay) in overrides.iter().enumerate() {
        for path in overlay.unknown_paths(defaults) {
            tracing::warn!(layer, path = %path, "override key is not declared in default values");
        }
        resolved.merge(overlay);
    }

    resolved
}

/// Deep merge two JSON values
fn deep_merge(base: &mut JsonValue, overlay: &JsonValue) {
    match (base, overlay) {
        (JsonValue::Object(base_map), JsonValue::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (_, JsonValue::Null) => {}
        (base, overlay) => {
            *base = overlay.clone();
        }
    }
}

fn collect_unknown(value: &JsonValue, schema: &JsonValue, prefix: &str, out: &mut Vec<String>) {
    let (JsonValue::Object(map), JsonValue::Object(schema_map)) = (value, schema) else {
        return;
    };
    if schema_map.is_empty() {
        return;
    }

    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match schema_map.get(key) {
            Some(schema_child) => collect_unknown(child, schema_child, &path, out),
            None => out.push(path),
        }
    }
}

/// Set a nested value by path
fn set_nested(value: &mut JsonValue, path: &[&str], new_value: JsonValue) {
    let Some((key, remaining)) = path.split_first() else {
        *value = new_value;
        return;
    };

    if !value.is_object() {
        *value = JsonValue::Object(serde_json::Map::new());
    }

    if let JsonValue::Object(map) = value {
        if remaining.is_empty() {
            map.insert(key.to_string(), new_value);
        } else {
            let entry = map
                .entry(key.to_string())
                .or_insert_with(|| JsonValue::Object(serde_json::Map::new()));
            set_nested(entry, remaining, new_value);
        }
    }
}

/// Get a nested value by path
fn get_nested<'a>(value: &'a JsonValue, path: &[&str]) -> Option<&'a JsonValue> {
    let Some((key, remaining)) = path.split_first() else {
        return Some(value);
    };

    match value {
        JsonValue::Object(map) => map.get(*key).and_then(|v| get_nested(v, remaining)),
        _ => None,
    }
}

/// Parse --set arguments (key=value format)
pub fn parse_set_values(set_args: &[String]) -> Result<Values> {
    let mut values = Values::new();

    for arg in set_args {
        let (key, val) = arg.split_once('=').ok_or_else(|| CoreError::ValuesMerge {
            message: format!("Invalid --set format: '{}'. Expected key=value", arg),
        })?;

        if key.trim().is_empty() {
            return Err(CoreError::ValuesMerge {
                message: format!("Invalid --set format: '{}'. Key is empty", arg),
            });
        }

        values.set(key.trim(), parse_scalar(val))?;
    }

    Ok(values)
}

fn parse_scalar(val: &str) -> JsonValue {
    if val == "true" {
        JsonValue::Bool(true)
    } else if val == "false" {
        JsonValue::Bool(false)
    } else if val == "null" {
        JsonValue::Null
    } else if let Ok(num) = val.parse::<i64>() {
        JsonValue::Number(num.into())
    } else if let Some(num) = val
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
    {
        JsonValue::Number(num)
    } else if val.starts_with('[') || val.starts_with('{') {
        serde_json::from_str(val).unwrap_or_else(|_| JsonValue::String(val.to_string()))
    } else {
        JsonValue::String(val.to_string())
    }
}
