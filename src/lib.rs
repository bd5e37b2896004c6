//! Function route generator.
//!
//! Reads a function manifest, validates every declared HTTP function and
//! renders the resulting route table through a user-supplied template.
//!
//! # Architecture Overview
//!
//! ```text
//!   -g Gopkg.toml / -y build.yml             -t routes.tmpl
//!              │                                   │
//!              ▼                                   ▼
//!   ┌─────────────────────┐             ┌─────────────────────┐
//!   │      manifest       │             │       render        │
//!   │  gopkg.rs / build.rs│             │  compile template   │
//!   └──────────┬──────────┘             └──────────┬──────────┘
//!              │ Vec<RawEntry>                     │
//!              ▼                                   │
//!   ┌─────────────────────┐                        │
//!   │       routing       │     RouteTable         │
//!   │ validate, normalize │───────────────────────▶│
//!   └─────────────────────┘   + import path        │
//!                                                  ▼
//!                                               stdout
//! ```
//!
//! Every stage returns [`GenerateResult`]; the first error stops the run and
//! nothing is written.

pub mod config;
pub mod error;
pub mod manifest;
pub mod observability;
pub mod render;
pub mod routing;

use std::io::Write;

use tracing::info;

pub use config::{GenerateOptions, ManifestFormat, ManifestSource, RawOptions};
pub use error::{GenerateError, GenerateResult};
pub use manifest::load_manifest;
pub use render::{Params, TemplateRenderer};
pub use routing::{normalize_path, validate_entries, Route, RouteTable};

/// Run the whole pipeline and write the rendered output to `out`.
///
/// Returns the number of routes rendered.
pub fn generate<W: Write>(options: &GenerateOptions, out: &mut W) -> GenerateResult<usize> {
    let renderer = TemplateRenderer::from_file(&options.template_path)?;
    let entries = load_manifest(&options.manifest)?;
    let table = RouteTable::from_entries(options.manifest.format, entries)?;
    let route_count = table.len();

    let output = renderer.render(&Params::new(options.import_path.clone(), table))?;
    out.write_all(output.as_bytes())?;
    out.flush()?;

    info!(
        manifest = %options.manifest.path.display(),
        routes = route_count,
        "Route table rendered"
    );
    Ok(route_count)
}
