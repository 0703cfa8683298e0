//! End-to-end generation against the built-in and override template sets.

use std::fs;
use std::path::Path;

use platform_adapters::{
    InMemoryTemplateSource, LayeredTemplateSource, MemoryFilesystem, MiniJinjaRenderer,
};
use platform_core::application::{ApplicationError, OutputWriter, WriteOutcome};
use platform_core::domain::{DomainError, MANIFEST_FILE};
use platform_core::prelude::*;
use tempfile::TempDir;

fn builtin_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LayeredTemplateSource::builtin()),
        Box::new(MiniJinjaRenderer::new()),
    )
}

fn override_service(dir: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LayeredTemplateSource::with_override_dir(dir)),
        Box::new(MiniJinjaRenderer::new()),
    )
}

fn paths(files: &[RenderedFile]) -> Vec<String> {
    files.iter().map(|f| f.path().to_string()).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn go_actions_yields_one_workflow() {
    let config = ScaffoldConfig::new("acme")
        .with_workflow_type("go")
        .with_actions(true);

    let files = builtin_service().generate(&config).unwrap();

    assert_eq!(paths(&files), [".github/workflows/go.yaml"]);
    assert!(files[0].content().contains("acme"));
    assert_eq!(files[0].mode(), FileMode::REGULAR);
}

#[test]
fn actions_and_docker_yield_three_files_in_order() {
    let config = ScaffoldConfig::new("acme")
        .with_actions(true)
        .with_docker(true);

    let files = builtin_service().generate(&config).unwrap();

    assert_eq!(
        paths(&files),
        [".github/workflows/go.yaml", "Dockerfile", "docker-build.yaml"]
    );
    for file in &files {
        assert!(file.content().contains("acme"), "{} lacks name", file.path());
    }
}

#[test]
fn everything_enabled() {
    let config = ScaffoldConfig::new("acme")
        .with_workflow_type("python")
        .with_actions(true)
        .with_docker(true)
        .with_flux(true);

    let files = builtin_service().generate(&config).unwrap();

    assert_eq!(
        paths(&files),
        [
            ".github/workflows/python.yaml",
            "Dockerfile",
            "docker-build.yaml",
            "fluxcd.yaml"
        ]
    );
    assert!(files[0].content().contains("${{ matrix.python-version }}"));
    assert!(files[1].content().starts_with("FROM python"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn output_is_deterministic() {
    let service = builtin_service();
    let config = ScaffoldConfig::new("acme")
        .with_actions(true)
        .with_docker(true)
        .with_flux(true);

    assert_eq!(
        service.generate(&config).unwrap(),
        service.generate(&config).unwrap()
    );
}

#[test]
fn validation_gate() {
    let service = builtin_service();
    for config in [
        ScaffoldConfig::new("").with_actions(true),
        ScaffoldConfig::new("my app").with_actions(true),
        ScaffoldConfig::new("acme")
            .with_workflow_type("ruby")
            .with_actions(true),
    ] {
        let err = service.generate(&config).unwrap_err();
        assert!(err.is_config_invalid(), "{err} should be a config error");
    }
}

#[test]
fn toggles_are_independent() {
    let service = builtin_service();

    let actions_only = service
        .generate(&ScaffoldConfig::new("acme").with_actions(true))
        .unwrap();
    let actions_paths = paths(&actions_only);
    assert!(!actions_paths.contains(&"Dockerfile".to_string()));
    assert!(!actions_paths.contains(&"fluxcd.yaml".to_string()));

    let docker_only = service
        .generate(&ScaffoldConfig::new("acme").with_docker(true))
        .unwrap();
    assert_eq!(paths(&docker_only), ["Dockerfile", "docker-build.yaml"]);
}

#[test]
fn node_and_typescript_are_the_same_flavor() {
    let service = builtin_service();
    let render = |flavor: &str| {
        service
            .generate(
                &ScaffoldConfig::new("acme")
                    .with_workflow_type(flavor)
                    .with_actions(true),
            )
            .unwrap()
    };

    let node = render("node");
    assert_eq!(paths(&node), [".github/workflows/typescript.yaml"]);
    assert_eq!(node, render("typescript"));
}

#[test]
fn legacy_docker_flag_matches_canonical() {
    let legacy: ScaffoldConfig = ScaffoldRequest {
        project_name: "acme".into(),
        use_docker: true,
        ..Default::default()
    }
    .into();

    let service = builtin_service();
    assert_eq!(
        service.generate(&legacy).unwrap(),
        service
            .generate(&ScaffoldConfig::new("acme").with_docker(true))
            .unwrap()
    );
}

#[test]
fn nothing_enabled_is_empty() {
    assert!(
        builtin_service()
            .generate(&ScaffoldConfig::new("acme"))
            .unwrap()
            .is_empty()
    );
}

// ============================================================================
// Override directory
// ============================================================================

#[test]
fn override_template_shadows_builtin() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("go.yaml.tmpl"),
        "custom workflow for {{ project_name }}\n",
    )
    .unwrap();

    let files = override_service(dir.path())
        .generate(&ScaffoldConfig::new("acme").with_actions(true).with_docker(true))
        .unwrap();

    assert_eq!(files[0].content(), "custom workflow for acme\n");
    // Not overridden: still the built-in Dockerfile.
    assert!(files[1].content().contains("FROM golang"));
}

#[test]
fn override_manifest_can_add_entries() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(MANIFEST_FILE),
        r#"templates:
  - name: go-workflow
    source: go.yaml.tmpl
    target: .github/workflows/go.yaml
    condition: workflow_go
  - name: readme
    source: README.md.tmpl
    target: README.md
    condition: with_actions
  - name: chart
    source: chart.tmpl
    target: chart.yaml
    condition: with_helm
"#,
    )
    .unwrap();
    fs::write(dir.path().join("README.md.tmpl"), "# {{ project_name }}\n").unwrap();

    let files = override_service(dir.path())
        .generate(&ScaffoldConfig::new("acme").with_actions(true).with_flux(true))
        .unwrap();

    assert_eq!(paths(&files), [".github/workflows/go.yaml", "README.md"]);
    assert_eq!(files[1].content(), "# acme\n");
}

#[test]
fn duplicate_names_in_override_manifest_are_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(MANIFEST_FILE),
        "templates:
  - {name: ci, source: go.yaml.tmpl, target: a.yaml, condition: with_actions}
  - {name: ci, source: go.yaml.tmpl, target: b.yaml, condition: with_actions}
",
    )
    .unwrap();

    let err = override_service(dir.path())
        .generate(&ScaffoldConfig::new("acme").with_actions(true))
        .unwrap_err();
    assert_eq!(
        err,
        PlatformError::from(DomainError::DuplicateMapping { name: "ci".into() })
    );
}

#[test]
fn broken_override_template_reports_feature_and_template() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("fluxcd.yaml.tmpl"), "{% if %}").unwrap();

    let err = override_service(dir.path())
        .generate(&ScaffoldConfig::new("acme").with_flux(true))
        .unwrap_err();

    assert_eq!(err.feature(), Some(Feature::Flux));
    assert!(matches!(
        err.root(),
        PlatformError::Application(ApplicationError::TemplateSyntax { template, .. })
            if template == "fluxcd.yaml.tmpl"
    ));
}

#[test]
fn manifest_pointing_at_missing_template_fails() {
    let source = InMemoryTemplateSource::with_builtin().unwrap();
    source.remove("Dockerfile.tmpl").unwrap();
    let service = ScaffoldService::new(Box::new(source), Box::new(MiniJinjaRenderer::new()));

    let err = service
        .generate(&ScaffoldConfig::new("acme").with_docker(true))
        .unwrap_err();
    assert_eq!(err.feature(), Some(Feature::Docker));
    assert_eq!(
        err.root(),
        &PlatformError::from(ApplicationError::TemplateNotFound {
            template: "Dockerfile.tmpl".into()
        })
    );
}

#[test]
fn half_a_docker_pair_is_rejected() {
    let source = InMemoryTemplateSource::with_builtin().unwrap();
    source
        .insert(
            MANIFEST_FILE,
            "templates:\n  - {name: dockerfile, source: Dockerfile.tmpl, target: Dockerfile, condition: with_docker}\n",
        )
        .unwrap();
    let service = ScaffoldService::new(Box::new(source), Box::new(MiniJinjaRenderer::new()));

    let err = service
        .generate(&ScaffoldConfig::new("acme").with_docker(true))
        .unwrap_err();
    assert!(matches!(
        err.root(),
        PlatformError::Application(ApplicationError::IncompleteArtifactSet { .. })
    ));
}

// ============================================================================
// Writing
// ============================================================================

#[test]
fn writer_persists_generated_files() {
    let files = builtin_service()
        .generate(&ScaffoldConfig::new("acme").with_actions(true).with_docker(true))
        .unwrap();
    let fs = MemoryFilesystem::new();
    let writer = OutputWriter::new(Box::new(fs.clone()));

    let outcomes = writer
        .write_all(Path::new("/work"), &files, |_| Ok(true))
        .unwrap();

    assert!(outcomes.iter().all(|o| matches!(o, WriteOutcome::Written(_))));
    assert_eq!(fs.list_files().len(), 3);
    assert!(
        fs.read_file(Path::new("/work/.github/workflows/go.yaml"))
            .unwrap()
            .contains("acme")
    );
}
