//! ssr-engine - Server-side custom element rendering
//!
//! Expands registered custom elements into static markup without a browser:
//! - Templates render an element's attributes into markup
//! - `<slot>` placeholders are filled with the element's light content
//! - `<script>`, `<style>` and `<link>` emitted by templates are hoisted
//!   into the document once each

mod config;
mod expand;
mod name;
mod renderer;
mod resources;
mod slots;
mod template;
mod walker;

use std::path::PathBuf;

use ssr_dom::NodeId;

pub use config::RendererConfig;
pub use expand::{ExpandedTemplate, expand};
pub use name::is_custom_element;
pub use renderer::{Renderer, RendererBuilder, encoding_for_label};
pub use resources::Resources;
pub use slots::fill_slots;
pub use template::{Attributes, Template, TemplateError, TemplateRegistry, TryTemplate};
pub use walker::process_custom_elements;

pub use encoding_rs::Encoding;
pub use ssr_html::ParseError;

/// Rendering error
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("template for <{tag}> failed")]
    Template {
        tag: String,
        #[source]
        source: TemplateError,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid {encoding}", path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("custom elements nested deeper than {limit} levels at <{tag}>")]
    NestingLimit { tag: String, limit: usize },
}
