//! ssr-render - Expand custom elements in an HTML file
//!
//! Usage:
//!   ssr-render [OPTIONS] <INPUT>
//!
//! Options:
//!   -t, --templates <DIR>   Directory of `<tag-name>.hbs` / `.html` templates
//!   -c, --config <FILE>     TOML config file
//!   -e, --encoding <LABEL>  Input encoding (default utf-8)
//!   -b, --body-only         Emit only the contents of <body>
//!   -o, --output <FILE>     Write to a file instead of stdout
//!   -v, --verbose           Debug logging

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mimalloc::MiMalloc;
use ssr_cli::{FileConfig, Settings, load_templates};
use ssr_engine::{Renderer, TemplateRegistry};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "ssr-render")]
#[command(about = "Render custom elements to static HTML")]
struct Cli {
    /// Input HTML file
    input: PathBuf,

    /// Directory of templates named after the elements they expand
    #[arg(short, long, value_name = "DIR")]
    templates: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input encoding label
    #[arg(short, long, value_name = "LABEL")]
    encoding: Option<String>,

    /// Emit only the contents of <body>
    #[arg(short, long)]
    body_only: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(
        file_config,
        cli.templates,
        cli.encoding.as_deref(),
        cli.body_only,
    )?;

    let registry = match &settings.templates {
        Some(dir) => load_templates(dir)?,
        None => TemplateRegistry::new(),
    };
    tracing::debug!("{} templates registered", registry.len());

    let renderer = Renderer::new(settings.renderer, registry);
    let html = renderer
        .render_file(&cli.input, settings.encoding)
        .with_context(|| format!("failed to render {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
