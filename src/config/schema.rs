//! Run configuration definitions.
//!
//! These types describe one generator invocation. They are built once from
//! the command line and are immutable afterwards.

use std::fmt;
use std::path::PathBuf;

/// Supported manifest layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestFormat {
    /// TOML with an array of tables under `metadata.heroku.functions`.
    Gopkg,
    /// YAML with a mapping of entries under `build.functions`.
    Build,
}

impl ManifestFormat {
    /// Dotted key path where function declarations live.
    pub fn functions_key(&self) -> &'static str {
        match self {
            ManifestFormat::Gopkg => "metadata.heroku.functions",
            ManifestFormat::Build => "build.functions",
        }
    }

    /// Manifest field that carries the function name.
    pub fn name_field(&self) -> &'static str {
        match self {
            ManifestFormat::Gopkg => "function",
            ManifestFormat::Build => "name",
        }
    }

    /// Template key for the route list.
    pub fn routes_key(&self) -> &'static str {
        match self {
            ManifestFormat::Gopkg => "Routes",
            ManifestFormat::Build => "HTTP",
        }
    }

    /// Template key for a route's function name.
    pub fn route_name_key(&self) -> &'static str {
        match self {
            ManifestFormat::Gopkg => "Function",
            ManifestFormat::Build => "Name",
        }
    }

    /// Whether entries of this format declare a trigger type.
    pub fn has_triggers(&self) -> bool {
        matches!(self, ManifestFormat::Build)
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Gopkg => write!(f, "toml"),
            ManifestFormat::Build => write!(f, "yaml"),
        }
    }
}

/// Manifest file and the layout it is parsed as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSource {
    /// Path to the manifest file.
    pub path: PathBuf,

    /// Layout used to extract function entries.
    pub format: ManifestFormat,
}

impl ManifestSource {
    pub fn new(path: impl Into<PathBuf>, format: ManifestFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }
}

/// Validated options for one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Customer import path, passed through to the template untouched.
    pub import_path: String,

    /// Manifest to read function declarations from.
    pub manifest: ManifestSource,

    /// Template file to render the route table with.
    pub template_path: PathBuf,
}
