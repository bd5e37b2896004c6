//! Manifest loading subsystem.
//!
//! # Data Flow
//! ```text
//! manifest file (TOML or YAML)
//!     → load_manifest (read to string)
//!     → ManifestAdapter for the format:
//!         - gopkg.rs (TOML, metadata.heroku.functions)
//!         - build.rs (YAML, build.functions)
//!     → Vec<RawEntry> (format-neutral, unvalidated)
//!     → routing::table (validation + normalization)
//! ```
//!
//! # Design Decisions
//! - Adapters only extract; they never judge field contents
//! - Entry order follows the manifest
//! - A document with no content is an empty manifest, not an error

pub mod build;
pub mod gopkg;

use std::fs;

use tracing::debug;

use crate::config::{ManifestFormat, ManifestSource};
use crate::error::{GenerateError, GenerateResult};

pub use build::BuildAdapter;
pub use gopkg::GopkgAdapter;

/// A field as found in the manifest, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Text(String),
    /// Present with a non-string value; carries the value's type name.
    NotText(&'static str),
}

/// One function declaration extracted from a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Identifies the entry in error messages.
    pub key: String,

    /// Declared trigger type. Always `None` for formats without triggers.
    pub trigger: Option<String>,

    /// Function name (`function` in TOML, `name` in YAML).
    pub name: FieldValue,

    /// Route path as written.
    pub path: FieldValue,
}

/// Extracts function declarations from one manifest layout.
pub trait ManifestAdapter {
    /// Layout handled by this adapter.
    fn format(&self) -> ManifestFormat;

    /// Parse document text and collect its function entries.
    ///
    /// Errors are plain messages; the caller attaches the file path.
    fn extract(&self, content: &str) -> Result<Vec<RawEntry>, String>;
}

/// Adapter for the given manifest format.
pub fn adapter_for(format: ManifestFormat) -> &'static dyn ManifestAdapter {
    match format {
        ManifestFormat::Gopkg => &GopkgAdapter,
        ManifestFormat::Build => &BuildAdapter,
    }
}

/// True when the document has nothing but blank lines and `#` comments.
///
/// TOML and YAML share this comment syntax.
pub(crate) fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

/// Read a manifest from disk and extract its raw function entries.
pub fn load_manifest(source: &ManifestSource) -> GenerateResult<Vec<RawEntry>> {
    let content = fs::read_to_string(&source.path).map_err(|e| GenerateError::Io {
        path: source.path.clone(),
        source: e,
    })?;

    let entries = adapter_for(source.format)
        .extract(&content)
        .map_err(|message| GenerateError::parse(&source.path, message))?;

    debug!(
        path = %source.path.display(),
        format = %source.format,
        entries = entries.len(),
        "Manifest loaded"
    );

    Ok(entries)
}
