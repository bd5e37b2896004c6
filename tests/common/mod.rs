//! Shared helpers for pipeline integration tests.

use std::path::PathBuf;

use fngenerate::{generate, GenerateOptions, GenerateResult, ManifestFormat, ManifestSource};

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Options for a run over fixture files.
#[allow(dead_code)]
pub fn options(manifest: &str, format: ManifestFormat, template: &str) -> GenerateOptions {
    GenerateOptions {
        import_path: "github.com/acme/functions".to_string(),
        manifest: ManifestSource::new(fixture(manifest), format),
        template_path: fixture(template),
    }
}

/// Run the pipeline into a buffer, returning whatever was written and the result.
#[allow(dead_code)]
pub fn run(options: &GenerateOptions) -> (String, GenerateResult<usize>) {
    let mut out = Vec::new();
    let result = generate(options, &mut out);
    (String::from_utf8(out).expect("output is utf-8"), result)
}
