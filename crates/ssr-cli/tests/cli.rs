//! Template directory loading and end-to-end runs of `ssr-render`

use std::fs;
use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use ssr_cli::{FileConfig, load_templates};
use ssr_engine::Renderer;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

#[test]
fn test_load_templates_by_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "my-card.hbs", r#"<div class="card"><h2>{{title}}</h2><slot></slot></div>"#);
    write(dir.path(), "my-badge.html", "<b>{{label}}</b>");
    write(dir.path(), "notes.txt", "ignored");

    let registry = load_templates(dir.path()).unwrap();
    assert_eq!(registry.len(), 2);

    let renderer = Renderer::new(Default::default(), registry);
    let html = renderer
        .render(r#"<my-card title="Hello"><my-badge label="new"></my-badge></my-card>"#)
        .unwrap();

    assert!(
        html.contains(concat!(
            r#"<my-card title="Hello"><div class="card"><h2>Hello</h2>"#,
            r#"<my-badge label="new"><b>new</b></my-badge></div></my-card>"#
        )),
        "got {html}"
    );
}

#[test]
fn test_invalid_stems_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "card.hbs", "<p>no hyphen</p>");
    write(dir.path(), "font-face.hbs", "<p>reserved</p>");
    write(dir.path(), "My-Card.hbs", "<p>uppercase</p>");
    write(dir.path(), "my-ok.hbs", "<p>ok</p>");

    let registry = load_templates(dir.path()).unwrap();
    let tags: Vec<_> = registry.tags().collect();

    assert_eq!(tags, vec!["my-ok"]);
}

#[test]
fn test_hbs_preferred_over_html() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "my-x.html", "<i>html</i>");
    write(dir.path(), "my-x.hbs", "<i>hbs</i>");

    let renderer = Renderer::new(
        ssr_engine::RendererConfig {
            body_only: true,
            ..Default::default()
        },
        load_templates(dir.path()).unwrap(),
    );

    assert_eq!(renderer.render("<my-x></my-x>").unwrap(), "<my-x><i>hbs</i></my-x>");
}

#[test]
fn test_broken_template_reported() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "my-bad.hbs", "{{#if}}unclosed");

    let err = load_templates(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("invalid template"), "got {err:#}");
}

#[test]
fn test_missing_directory_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_templates(&dir.path().join("nope")).unwrap_err();

    assert!(err.to_string().starts_with("failed to read template directory"), "got {err:#}");
}

#[test]
fn test_config_templates_relative_to_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "ssr.toml", "templates = \"components\"\nmax_nesting = 4\n");

    let config = FileConfig::load(&dir.path().join("ssr.toml")).unwrap();

    assert_eq!(config.templates, Some(dir.path().join("components")));
    assert_eq!(config.renderer.max_nesting, 4);
    assert!(!config.renderer.body_only);
}

#[test]
fn test_binary_renders_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let templates = dir.path().join("components");
    fs::create_dir(&templates).unwrap();
    write(&templates, "my-greet.hbs", "<style>p{}</style><p>Hi {{name}}</p>");
    write(dir.path(), "ssr.toml", "templates = \"components\"\n");
    write(dir.path(), "index.html", r#"<my-greet name="Ada"></my-greet>"#);
    let output = dir.path().join("out.html");

    let status = Command::new(env!("CARGO_BIN_EXE_ssr-render"))
        .arg("--config")
        .arg(dir.path().join("ssr.toml"))
        .arg("--output")
        .arg(&output)
        .arg(dir.path().join("index.html"))
        .status()
        .unwrap();
    assert!(status.success());

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"<html><head><style>p{}</style></head><body><my-greet name="Ada"><p>Hi Ada</p></my-greet></body></html>"#
    );
}

#[test]
fn test_binary_body_only_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "my-b.hbs", "<b><slot></slot></b>");
    write(dir.path(), "index.html", "<my-b>bold</my-b>");

    let output = Command::new(env!("CARGO_BIN_EXE_ssr-render"))
        .args(["-b", "-t"])
        .arg(dir.path())
        .arg(dir.path().join("index.html"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "<my-b><b>bold</b></my-b>");
}

#[test]
fn test_binary_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ssr-render"))
        .arg(dir.path().join("missing.html"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to render"), "got {stderr}");
}
