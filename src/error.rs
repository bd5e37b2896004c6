//! Error taxonomy for the generator pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating a route table.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A manifest or template file could not be read.
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not a valid document or lacks the functions key path.
    #[error("Parse error in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A required entry field is absent or empty.
    #[error("Missing `{field}` in function entry `{entry}`")]
    MissingField { entry: String, field: &'static str },

    /// A required entry field exists but is not a string.
    #[error("Invalid `{field}` value in function entry `{entry}`: expected string, found {found}")]
    InvalidFieldType {
        entry: String,
        field: &'static str,
        found: String,
    },

    /// A YAML entry declares a trigger other than `http`.
    #[error("Invalid trigger `{trigger}` for function entry `{entry}`: only `http` is supported")]
    InvalidTrigger { entry: String, trigger: String },

    /// The template failed to compile or to render.
    #[error("Template error: {0}")]
    Template(String),

    /// Rendered output could not be written.
    #[error("IO error writing output: {0}")]
    Output(#[from] std::io::Error),

    /// The command-line flags do not describe a runnable generation.
    #[error("Usage error: {0}")]
    Usage(String),
}

impl GenerateError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for generator operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
