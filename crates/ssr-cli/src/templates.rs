//! Handlebars-backed templates loaded from a directory

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use handlebars::Handlebars;
use ssr_engine::{Attributes, Template, TemplateError, TemplateRegistry, is_custom_element};

/// Template file extensions, in order of preference
const EXTENSIONS: &[&str] = &["hbs", "html"];

/// One named template inside a shared Handlebars registry
#[derive(Clone)]
pub struct HandlebarsTemplate {
    handlebars: Arc<Handlebars<'static>>,
    name: String,
}

impl HandlebarsTemplate {
    pub fn new(handlebars: Arc<Handlebars<'static>>, name: impl Into<String>) -> Self {
        Self {
            handlebars,
            name: name.into(),
        }
    }
}

impl Template for HandlebarsTemplate {
    fn render(&self, attrs: &Attributes) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(&self.name, attrs)?)
    }
}

/// Register every `<tag>.hbs` / `<tag>.html` file in `dir` under its stem.
///
/// Stems that are not valid custom element names are skipped. When both
/// extensions exist for one tag the `.hbs` file is used.
pub fn load_templates(dir: &Path) -> Result<TemplateRegistry> {
    let mut paths = fs::read_dir(dir)
        .with_context(|| format!("failed to read template directory {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, _>>()
        .with_context(|| format!("failed to list template directory {}", dir.display()))?;
    paths.sort_by_key(|path| extension_rank(path));

    let mut handlebars = Handlebars::new();
    let mut tags: Vec<String> = Vec::new();

    for path in paths {
        if extension_rank(&path) == usize::MAX || !path.is_file() {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };
        if !is_custom_element(stem) {
            tracing::warn!(
                "Skipping {}: \"{}\" is not a valid custom element name",
                path.display(),
                stem
            );
            continue;
        }
        if tags.iter().any(|tag| tag == stem) {
            tracing::debug!("Ignoring {}, <{}> already loaded", path.display(), stem);
            continue;
        }

        let source = fs::read_to_string(&path)
            .with_context(|| format!("failed to read template {}", path.display()))?;
        handlebars
            .register_template_string(stem, source)
            .with_context(|| format!("invalid template {}", path.display()))?;
        tracing::debug!("Loaded template <{}> from {}", stem, path.display());
        tags.push(stem.to_string());
    }

    let handlebars = Arc::new(handlebars);
    let mut registry = TemplateRegistry::new();
    for tag in tags {
        registry.insert(tag.clone(), HandlebarsTemplate::new(Arc::clone(&handlebars), tag));
    }
    Ok(registry)
}

/// Position of the file's extension in `EXTENSIONS`, `usize::MAX` if absent
fn extension_rank(path: &Path) -> usize {
    path.extension()
        .and_then(OsStr::to_str)
        .and_then(|ext| EXTENSIONS.iter().position(|e| *e == ext))
        .unwrap_or(usize::MAX)
}
