//! Validated HTTP routes.

/// Prefix `path` with `/` unless it already starts with one.
///
/// Nothing else is touched: repeated slashes, trailing slashes and query
/// strings are kept as written.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// A function exposed at an HTTP path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    path: String,
}

impl Route {
    /// Create a route, normalizing the path.
    pub fn new(name: impl Into<String>, path: &str) -> Self {
        Self {
            name: name.into(),
            path: normalize_path(path),
        }
    }

    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }
}
