//! Template rendering.
//!
//! # Data Flow
//! ```text
//! template file → TemplateRenderer::from_file (compile once)
//! RouteTable + import path → Params → JSON context
//!     → Handlebars render → String
//! ```
//!
//! # Template Context
//!
//! | Format | list key | name key   | path key |
//! |--------|----------|------------|----------|
//! | TOML   | `Routes` | `Function` | `Path`   |
//! | YAML   | `HTTP`   | `Name`     | `Path`   |
//!
//! `ImportPath` is available at the top level for both formats:
//!
//! ```text
//! package main
//! import fn "{{ImportPath}}"
//! {{#each Routes}}
//! mux.Handle("{{Path}}", fn.{{Function}})
//! {{/each}}
//! ```
//!
//! # Design Decisions
//! - No HTML escaping: output is source code or config, not markup
//! - Strict mode: a misspelled key is an error, not a blank
//! - Render to a `String` first so failures never leave partial output

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::{Map, Value};

use crate::error::{GenerateError, GenerateResult};
use crate::routing::RouteTable;

const TEMPLATE_NAME: &str = "main";

/// Everything a template can see.
#[derive(Debug, Clone)]
pub struct Params {
    pub import_path: String,
    pub routes: RouteTable,
}

impl Params {
    pub fn new(import_path: impl Into<String>, routes: RouteTable) -> Self {
        Self {
            import_path: import_path.into(),
            routes,
        }
    }

    /// Build the template context using the key names of the table's format.
    pub fn to_context(&self) -> Value {
        let format = self.routes.format();
        let routes = self
            .routes
            .routes()
            .iter()
            .map(|route| {
                let mut object = Map::new();
                object.insert(format.route_name_key().to_string(), route.name().into());
                object.insert("Path".to_string(), route.path().into());
                Value::Object(object)
            })
            .collect();

        let mut context = Map::new();
        context.insert("ImportPath".to_string(), self.import_path.clone().into());
        context.insert(format.routes_key().to_string(), Value::Array(routes));
        Value::Object(context)
    }
}

/// A compiled template ready to render route tables.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Compile template source text.
    pub fn compile(source: &str) -> GenerateResult<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| GenerateError::Template(e.to_string()))?;

        Ok(Self { registry })
    }

    /// Read and compile a template file.
    pub fn from_file(path: &Path) -> GenerateResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| GenerateError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::compile(&source)
    }

    /// Render the template against `params`.
    pub fn render(&self, params: &Params) -> GenerateResult<String> {
        self.registry
            .render(TEMPLATE_NAME, &params.to_context())
            .map_err(|e| GenerateError::Template(e.to_string()))
    }
}
