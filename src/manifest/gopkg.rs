//! TOML manifests with functions under `metadata.heroku.functions`.
//!
//! ```toml
//! [[metadata.heroku.functions]]
//! function = "worker"
//! path = "jobs"
//! ```

use toml::{Table, Value};

use crate::config::ManifestFormat;
use crate::manifest::{is_blank_document, FieldValue, ManifestAdapter, RawEntry};

const PARENT_KEYS: [&str; 2] = ["metadata", "heroku"];
const FUNCTIONS_KEY: &str = "functions";

/// Adapter for `Gopkg.toml`-style manifests.
#[derive(Debug, Clone, Copy, Default)]
pub struct GopkgAdapter;

impl ManifestAdapter for GopkgAdapter {
    fn format(&self) -> ManifestFormat {
        ManifestFormat::Gopkg
    }

    fn extract(&self, content: &str) -> Result<Vec<RawEntry>, String> {
        if is_blank_document(content) {
            return Ok(Vec::new());
        }

        let root: Table = toml::from_str(content).map_err(|e| e.to_string())?;
        let functions = functions_array(&root)?;

        functions
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Table(table) => Ok(RawEntry {
                    key: format!("{FUNCTIONS_KEY}[{index}]"),
                    trigger: None,
                    name: field(table, "function"),
                    path: field(table, "path"),
                }),
                other => Err(format!(
                    "`{}[{}]` must be a table, found {}",
                    self.format().functions_key(),
                    index,
                    other.type_str()
                )),
            })
            .collect()
    }
}

/// Walk `metadata.heroku` down to the `functions` array.
fn functions_array(root: &Table) -> Result<&Vec<Value>, String> {
    let full_key = ManifestFormat::Gopkg.functions_key();
    let mut scope = root;
    let mut walked: Vec<&str> = Vec::with_capacity(PARENT_KEYS.len());

    for segment in PARENT_KEYS {
        walked.push(segment);
        scope = match scope.get(segment) {
            Some(Value::Table(table)) => table,
            Some(other) => {
                return Err(format!(
                    "`{}` must be a table, found {}",
                    walked.join("."),
                    other.type_str()
                ))
            }
            None => return Err(format!("missing `{full_key}`")),
        };
    }

    match scope.get(FUNCTIONS_KEY) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(format!(
            "`{full_key}` must be an array of tables, found {}",
            other.type_str()
        )),
        None => Err(format!("missing `{full_key}`")),
    }
}

fn field(table: &Table, name: &str) -> FieldValue {
    match table.get(name) {
        None => FieldValue::Absent,
        Some(Value::String(text)) => FieldValue::Text(text.clone()),
        Some(other) => FieldValue::NotText(other.type_str()),
    }
}
