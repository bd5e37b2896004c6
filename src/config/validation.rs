//! Command-line option validation.
//!
//! # Responsibilities
//! - Require exactly one manifest flag (`-g` or `-y`)
//! - Require a template path
//! - Derive the manifest format from the flag that was used
//!
//! # Design Decisions
//! - Reports every problem at once so a broken invocation is fixed in one pass
//! - Checks and construction happen in one pass over the flags
//! - Runs before any file is opened

use std::fmt;
use std::path::PathBuf;

use crate::config::schema::{GenerateOptions, ManifestFormat, ManifestSource};
use crate::error::{GenerateError, GenerateResult};

/// Flags as given on the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub import_path: Option<String>,
    pub gopkg: Option<PathBuf>,
    pub yaml: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

/// A single problem with the given flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoManifest,
    ConflictingManifests,
    NoTemplate,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoManifest => write!(f, "a manifest is required (-g <toml> or -y <yaml>)"),
            ValidationError::ConflictingManifests => write!(f, "-g and -y cannot be used together"),
            ValidationError::NoTemplate => write!(f, "a template is required (-t <path>)"),
        }
    }
}

/// Check raw flags, collecting every problem found, and build the options.
pub fn validate_options(raw: RawOptions) -> Result<GenerateOptions, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let manifest = match (raw.gopkg, raw.yaml) {
        (Some(path), None) => Some(ManifestSource::new(path, ManifestFormat::Gopkg)),
        (None, Some(path)) => Some(ManifestSource::new(path, ManifestFormat::Build)),
        (None, None) => {
            errors.push(ValidationError::NoManifest);
            None
        }
        (Some(_), Some(_)) => {
            errors.push(ValidationError::ConflictingManifests);
            None
        }
    };

    if raw.template.is_none() {
        errors.push(ValidationError::NoTemplate);
    }

    match (manifest, raw.template) {
        (Some(manifest), Some(template_path)) => Ok(GenerateOptions {
            import_path: raw.import_path.unwrap_or_default(),
            manifest,
            template_path,
        }),
        _ => Err(errors),
    }
}

impl TryFrom<RawOptions> for GenerateOptions {
    type Error = GenerateError;

    fn try_from(raw: RawOptions) -> GenerateResult<Self> {
        validate_options(raw).map_err(|errors| {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            GenerateError::Usage(joined)
        })
    }
}
