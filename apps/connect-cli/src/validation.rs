//! Structural validation of connector documents
//!
//! Checks key presence only. Value ranges and types are left to the control
//! plane, which validates again on submission. Checks stop at the first
//! missing key.

use crate::error::{CliError, CliResult};
use crate::models::{ConnectorConfig, PluginKind, CONNECTOR_CLASS_KEY};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Validate a typed document and return the plugin kind it declares
pub fn validate(document: &ConnectorConfig) -> CliResult<PluginKind> {
    if document.name.trim().is_empty() {
        return Err(CliError::MissingKey("name".to_string()));
    }
    if document.config.is_empty() {
        return Err(CliError::MissingKey("config".to_string()));
    }

    let class = document
        .connector_class()
        .ok_or_else(|| CliError::MissingKey(CONNECTOR_CLASS_KEY.to_string()))?;

    let kind = PluginKind::from_class(class);
    if !kind.is_known() {
        return Err(CliError::UnknownPlugin(class.to_string()));
    }

    if let Some(missing) = kind
        .required_keys()
        .iter()
        .find(|key| !document.config.contains_key(**key))
    {
        return Err(CliError::MissingKey(missing.to_string()));
    }

    Ok(kind)
}

/// Validate an untyped JSON document and convert it to a [`ConnectorConfig`]
///
/// Scalar config values are normalised to strings; `null` values count as
/// absent.
pub fn validate_value(value: &Value) -> CliResult<ConnectorConfig> {
    let object = value
        .as_object()
        .ok_or_else(|| CliError::Validation("connector document must be a JSON object".into()))?;

    let name = match object.get("name") {
        None | Some(Value::Null) => return Err(CliError::MissingKey("name".to_string())),
        Some(Value::String(s)) if s.trim().is_empty() => {
            return Err(CliError::MissingKey("name".to_string()))
        }
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(CliError::Validation("'name' must be a string".into())),
    };

    let config = match object.get("config") {
        None | Some(Value::Null) => return Err(CliError::MissingKey("config".to_string())),
        Some(Value::Object(map)) if map.is_empty() => {
            return Err(CliError::MissingKey("config".to_string()))
        }
        Some(Value::Object(map)) => normalise_config(map)?,
        Some(_) => return Err(CliError::Validation("'config' must be a JSON object".into())),
    };

    let document = ConnectorConfig { name, config };
    validate(&document)?;
    Ok(document)
}

fn normalise_config(map: &Map<String, Value>) -> CliResult<BTreeMap<String, String>> {
    let mut config = BTreeMap::new();
    for (key, value) in map {
        let value = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(CliError::Validation(format!(
                    "config value for '{key}' must be a string, number or boolean"
                )))
            }
        };
        // The class is submitted as written, so it must be stored as it was looked up
        let value = if key == CONNECTOR_CLASS_KEY {
            value.trim().to_string()
        } else {
            value
        };
        config.insert(key.clone(), value);
    }
    Ok(config)
}

/// Read, parse and validate a connector document from a JSON file
pub fn load_document(path: &Path) -> CliResult<ConnectorConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("Cannot read {}: {e}", path.display())))?;

    let value: Value = serde_json::from_str(&content).map_err(|e| CliError::InvalidJson {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    validate_value(&value)
}
