//! Route table construction.
//!
//! # Responsibilities
//! - Reject entries whose trigger is not `http`
//! - Require a non-empty string name and path on every entry
//! - Normalize paths and keep entries in manifest order
//!
//! # Design Decisions
//! - Stops at the first bad entry; no partial tables
//! - Immutable after construction

use tracing::debug;

use crate::config::ManifestFormat;
use crate::error::{GenerateError, GenerateResult};
use crate::manifest::{FieldValue, RawEntry};
use crate::routing::route::Route;

/// The only trigger type that produces a route.
pub const HTTP_TRIGGER: &str = "http";

/// Validated routes for one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    format: ManifestFormat,
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate raw entries and build the table.
    pub fn from_entries(format: ManifestFormat, entries: Vec<RawEntry>) -> GenerateResult<Self> {
        let routes = validate_entries(format, entries)?;
        Ok(Self { format, routes })
    }

    /// Manifest format the routes came from.
    pub fn format(&self) -> ManifestFormat {
        self.format
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Turn raw entries into routes, failing on the first invalid entry.
pub fn validate_entries(format: ManifestFormat, entries: Vec<RawEntry>) -> GenerateResult<Vec<Route>> {
    entries
        .into_iter()
        .map(|entry| validate_entry(format, entry))
        .collect()
}

fn validate_entry(format: ManifestFormat, entry: RawEntry) -> GenerateResult<Route> {
    if format.has_triggers() {
        if let Some(trigger) = entry.trigger.as_deref() {
            if trigger != HTTP_TRIGGER {
                return Err(GenerateError::InvalidTrigger {
                    entry: entry.key,
                    trigger: trigger.to_string(),
                });
            }
        }
    }

    let name = required_text(&entry.key, format.name_field(), entry.name)?;
    let path = required_text(&entry.key, "path", entry.path)?;
    let route = Route::new(name, &path);

    debug!(entry = %entry.key, name = route.name(), path = route.path(), "Route accepted");
    Ok(route)
}

fn required_text(entry: &str, field: &'static str, value: FieldValue) -> GenerateResult<String> {
    match value {
        FieldValue::Text(text) if !text.is_empty() => Ok(text),
        FieldValue::Text(_) | FieldValue::Absent => Err(GenerateError::MissingField {
            entry: entry.to_string(),
            field,
        }),
        FieldValue::NotText(found) => Err(GenerateError::InvalidFieldType {
            entry: entry.to_string(),
            field,
            found: found.to_string(),
        }),
    }
}
