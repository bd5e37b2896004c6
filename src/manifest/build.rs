//! YAML manifests with functions under `build.functions`.
//!
//! ```yaml
//! build:
//!   functions:
//!     web:
//!       trigger: http
//!       name: api
//!       path: /v1
//! ```
//!
//! Entries are keyed by an arbitrary name. The mapping is walked as a
//! [`serde_yaml::Mapping`], so entries come out in manifest order.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::config::ManifestFormat;
use crate::manifest::{is_blank_document, FieldValue, ManifestAdapter, RawEntry};

/// One entry under `build.functions`. Every field is optional here;
/// presence and type are enforced during validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FunctionEntry {
    pub trigger: Option<Value>,
    pub name: Option<Value>,
    pub path: Option<Value>,
}

impl FunctionEntry {
    /// Trigger as text. Plain scalars read as their YAML text; anything else
    /// reads as its kind, which never equals `http`.
    fn trigger_text(&self) -> Option<String> {
        self.trigger
            .as_ref()
            .map(|value| scalar_text(value).unwrap_or_else(|| kind(value).to_string()))
    }
}

/// String, number and boolean scalars as text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn field_value(value: Option<&Value>) -> FieldValue {
    match value {
        None | Some(Value::Null) => FieldValue::Absent,
        Some(value) => match scalar_text(value) {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::NotText(kind(value)),
        },
    }
}

/// Adapter for `build.functions` YAML manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildAdapter;

impl ManifestAdapter for BuildAdapter {
    fn format(&self) -> ManifestFormat {
        ManifestFormat::Build
    }

    fn extract(&self, content: &str) -> Result<Vec<RawEntry>, String> {
        if is_blank_document(content) {
            return Ok(Vec::new());
        }

        let root: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        let root = match root {
            Value::Null => return Ok(Vec::new()),
            Value::Mapping(mapping) if mapping.is_empty() => return Ok(Vec::new()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(format!(
                    "document root must be a mapping, found {}",
                    kind(&other)
                ))
            }
        };

        let Some(functions) = functions_mapping(&root)? else {
            return Ok(Vec::new());
        };

        functions
            .iter()
            .map(|(key, value)| {
                let key = entry_key(key)?;
                let entry = match value {
                    Value::Null => FunctionEntry::default(),
                    Value::Mapping(_) => serde_yaml::from_value(value.clone())
                        .map_err(|e| format!("function entry `{key}`: {e}"))?,
                    other => {
                        return Err(format!(
                            "function entry `{key}` must be a mapping, found {}",
                            kind(other)
                        ))
                    }
                };

                Ok(RawEntry {
                    key,
                    trigger: entry.trigger_text(),
                    name: field_value(entry.name.as_ref()),
                    path: field_value(entry.path.as_ref()),
                })
            })
            .collect()
    }
}

/// Walk `build` down to `functions`. `functions:` with no value counts as empty.
fn functions_mapping(root: &Mapping) -> Result<Option<&Mapping>, String> {
    let full_key = ManifestFormat::Build.functions_key();

    let build = match root.get("build") {
        Some(Value::Mapping(build)) => build,
        Some(other) => return Err(format!("`build` must be a mapping, found {}", kind(other))),
        None => return Err(format!("missing `{full_key}`")),
    };

    match build.get("functions") {
        Some(Value::Mapping(functions)) => Ok(Some(functions)),
        Some(Value::Null) => Ok(None),
        Some(other) => Err(format!("`{full_key}` must be a mapping, found {}", kind(other))),
        None => Err(format!("missing `{full_key}`")),
    }
}

fn entry_key(key: &Value) -> Result<String, String> {
    scalar_text(key).ok_or_else(|| format!("function keys must be scalars, found {}", kind(key)))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
