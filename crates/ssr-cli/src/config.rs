//! Command-line configuration
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use ssr_engine::{Encoding, RendererConfig, encoding_for_label};

/// Contents of a `--config` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    #[serde(flatten)]
    pub renderer: RendererConfig,

    /// Template directory, relative to the config file
    pub templates: Option<PathBuf>,

    /// Input encoding label
    pub encoding: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: FileConfig = toml::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;

        if let (Some(templates), Some(base)) = (&config.templates, path.parent()) {
            if templates.is_relative() {
                config.templates = Some(base.join(templates));
            }
        }
        Ok(config)
    }
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub renderer: RendererConfig,
    pub templates: Option<PathBuf>,
    pub encoding: &'static Encoding,
}

impl Settings {
    /// Merge flag values over `file`
    pub fn resolve(
        file: FileConfig,
        templates: Option<PathBuf>,
        encoding: Option<&str>,
        body_only: bool,
    ) -> Result<Self> {
        let label = encoding.or(file.encoding.as_deref()).unwrap_or("utf-8");
        let encoding =
            encoding_for_label(label).ok_or_else(|| anyhow!("unknown encoding label \"{label}\""))?;

        let mut renderer = file.renderer;
        renderer.body_only |= body_only;

        Ok(Self {
            renderer,
            templates: templates.or(file.templates),
            encoding,
        })
    }
}
