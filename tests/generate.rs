//! End-to-end runs of the generator over fixture manifests and templates.

use fngenerate::{GenerateError, ManifestFormat, ManifestSource, RawOptions, GenerateOptions};
use pretty_assertions::assert_eq;

mod common;

use common::{fixture, options, run};

#[test]
fn test_toml_manifest_renders_every_route() {
    let (output, result) = run(&options("Gopkg.toml", ManifestFormat::Gopkg, "routes.go.hbs"));

    assert_eq!(result.unwrap(), 3);
    assert!(output.contains("import fn \"github.com/acme/functions\""));
    assert!(output.contains("\"/jobs\": fn.Worker,"));
    assert!(output.contains("\"/v1\": fn.API,"));
    assert!(output.contains("\"//health/\": fn.Health,"));
    assert_eq!(output.matches(": fn.").count(), 3);
}

#[test]
fn test_toml_routes_keep_manifest_order() {
    let (output, result) = run(&options("Gopkg.toml", ManifestFormat::Gopkg, "routes.go.hbs"));
    result.unwrap();

    let worker = output.find("fn.Worker").unwrap();
    let api = output.find("fn.API").unwrap();
    let health = output.find("fn.Health").unwrap();
    assert!(worker < api && api < health);
}

#[test]
fn test_yaml_manifest_renders_http_routes() {
    let (output, result) = run(&options("build.yml", ManifestFormat::Build, "routes.yml.hbs"));

    assert_eq!(result.unwrap(), 3);
    assert!(output.starts_with("import: github.com/acme/functions\n"));
    assert!(output.contains("name: \"api\"\n    path: \"/v1\""));
    assert!(output.contains("name: \"admin\"\n    path: \"/admin\""));
    assert!(output.contains("name: \"static\"\n    path: \"/static/\""));

    let api = output.find("\"api\"").unwrap();
    let admin = output.find("\"admin\"").unwrap();
    let assets = output.find("\"static\"").unwrap();
    assert!(api < admin && admin < assets);
}

#[test]
fn test_non_http_trigger_writes_nothing() {
    let (output, result) = run(&options("cron_trigger.yml", ManifestFormat::Build, "routes.yml.hbs"));

    assert!(matches!(
        result,
        Err(GenerateError::InvalidTrigger { ref entry, ref trigger }) if entry == "worker" && trigger == "cron"
    ));
    assert_eq!(output, "");
}

#[test]
fn test_missing_fields_write_nothing() {
    let (output, result) = run(&options("missing_path.toml", ManifestFormat::Gopkg, "routes.go.hbs"));
    assert!(matches!(result, Err(GenerateError::MissingField { field: "path", .. })));
    assert_eq!(output, "");

    let (output, result) = run(&options("missing_name.yml", ManifestFormat::Build, "routes.yml.hbs"));
    assert!(matches!(result, Err(GenerateError::MissingField { field: "name", .. })));
    assert_eq!(output, "");
}

#[test]
fn test_wrong_field_type() {
    let (output, result) = run(&options("wrong_type.toml", ManifestFormat::Gopkg, "routes.go.hbs"));
    assert!(matches!(
        result,
        Err(GenerateError::InvalidFieldType { field: "path", ref found, .. }) if found == "integer"
    ));
    assert_eq!(output, "");
}

#[test]
fn test_empty_manifests_render_zero_routes() {
    let (output, result) = run(&options("empty.toml", ManifestFormat::Gopkg, "routes.go.hbs"));
    assert_eq!(result.unwrap(), 0);
    assert!(output.contains("import fn \"github.com/acme/functions\""));
    assert!(!output.contains(": fn."));

    let (output, result) = run(&options("empty.yml", ManifestFormat::Build, "routes.yml.hbs"));
    assert_eq!(result.unwrap(), 0);
    assert!(output.starts_with("import: github.com/acme/functions\nroutes:\n"));
    assert!(!output.contains("name:"));
}

#[test]
fn test_missing_key_path_is_parse_error() {
    let (output, result) = run(&options("no_functions.toml", ManifestFormat::Gopkg, "routes.go.hbs"));
    match result {
        Err(GenerateError::Parse { path, message }) => {
            assert_eq!(path, fixture("no_functions.toml"));
            assert_eq!(message, "missing `metadata.heroku.functions`");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(output, "");
}

#[test]
fn test_wrong_format_is_parse_error() {
    let (_, result) = run(&options("build.yml", ManifestFormat::Gopkg, "routes.go.hbs"));
    assert!(matches!(result, Err(GenerateError::Parse { .. })));
}

#[test]
fn test_template_errors() {
    let (output, result) = run(&options("Gopkg.toml", ManifestFormat::Gopkg, "broken.hbs"));
    assert!(matches!(result, Err(GenerateError::Template(_))));
    assert_eq!(output, "");

    let (output, result) = run(&options("Gopkg.toml", ManifestFormat::Gopkg, "typo.hbs"));
    assert!(matches!(result, Err(GenerateError::Template(_))));
    assert_eq!(output, "");
}

#[test]
fn test_missing_files_are_io_errors() {
    let (_, result) = run(&options("Gopkg.toml", ManifestFormat::Gopkg, "nope.hbs"));
    assert!(matches!(result, Err(GenerateError::Io { ref path, .. }) if *path == fixture("nope.hbs")));

    let (_, result) = run(&options("nope.toml", ManifestFormat::Gopkg, "routes.go.hbs"));
    assert!(matches!(result, Err(GenerateError::Io { ref path, .. }) if *path == fixture("nope.toml")));
}

#[test]
fn test_options_from_flags_drive_a_run() {
    let raw = RawOptions {
        import_path: Some("github.com/acme/functions".into()),
        yaml: Some(fixture("build.yml")),
        template: Some(fixture("routes.yml.hbs")),
        ..Default::default()
    };
    let options = GenerateOptions::try_from(raw).unwrap();
    assert_eq!(options.manifest, ManifestSource::new(fixture("build.yml"), ManifestFormat::Build));

    let (output, result) = run(&options);
    assert_eq!(result.unwrap(), 3);
    assert!(output.contains("path: \"/admin\""));
}
