//! Renderer - parse, expand, hoist, serialize

use std::path::Path;

use encoding_rs::Encoding;
use ssr_html::{HtmlParser, HtmlSerializer};

use crate::{
    Attributes, RenderError, RendererConfig, Template, TemplateRegistry, process_custom_elements,
};

/// Renders documents containing custom elements into static markup.
///
/// The registry is read-only after construction, so one `Renderer` can
/// serve concurrent `render` calls.
#[derive(Debug)]
pub struct Renderer {
    config: RendererConfig,
    registry: TemplateRegistry,
}

impl Renderer {
    pub fn new(config: RendererConfig, registry: TemplateRegistry) -> Self {
        Self { config, registry }
    }

    pub fn builder() -> RendererBuilder {
        RendererBuilder::default()
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Render a complete HTML document
    pub fn render(&self, markup: &str) -> Result<String, RenderError> {
        let mut document = HtmlParser::new().parse(markup)?;
        let head = document.head();
        let body = document.body();

        let resources = process_custom_elements(
            document.tree_mut(),
            body,
            &self.registry,
            self.config.max_nesting,
        )?;
        resources.merge_into(document.tree_mut(), head, body);

        let serializer = HtmlSerializer::new();
        let output = if self.config.body_only {
            serializer.serialize_inner(document.tree(), body)
        } else {
            serializer.serialize_outer(document.tree(), document.tree().root())
        };
        tracing::debug!("Rendered {} bytes of markup", output.len());
        Ok(output)
    }

    /// Read `path`, decode it with `encoding` and render it.
    ///
    /// A byte order mark matching `encoding` is skipped; malformed input is
    /// an error rather than being replaced.
    pub fn render_file(
        &self,
        path: impl AsRef<Path>,
        encoding: &'static Encoding,
    ) -> Result<String, RenderError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let input = match Encoding::for_bom(&bytes) {
            Some((bom_encoding, bom_len)) if bom_encoding == encoding => &bytes[bom_len..],
            _ => &bytes[..],
        };
        let markup = encoding
            .decode_without_bom_handling_and_without_replacement(input)
            .ok_or_else(|| RenderError::Decode {
                path: path.to_path_buf(),
                encoding: encoding.name(),
            })?;

        tracing::debug!("Rendering {} ({})", path.display(), encoding.name());
        self.render(&markup)
    }
}

/// Resolve a WHATWG encoding label such as `utf-8` or `latin1`
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Builder for `Renderer`
#[derive(Debug, Default)]
pub struct RendererBuilder {
    config: RendererConfig,
    registry: TemplateRegistry,
}

impl RendererBuilder {
    pub fn config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    pub fn body_only(mut self, body_only: bool) -> Self {
        self.config.body_only = body_only;
        self
    }

    pub fn max_nesting(mut self, max_nesting: usize) -> Self {
        self.config.max_nesting = max_nesting;
        self
    }

    /// Register a closure template
    pub fn template<F>(mut self, tag: impl Into<String>, template: F) -> Self
    where
        F: Fn(&Attributes) -> String + Send + Sync + 'static,
    {
        self.registry.insert(tag, template);
        self
    }

    /// Register any `Template` implementation
    pub fn register(mut self, tag: impl Into<String>, template: impl Template + 'static) -> Self {
        self.registry.insert(tag, template);
        self
    }

    pub fn build(self) -> Renderer {
        Renderer::new(self.config, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }

    #[test]
    fn test_builder_settings() {
        let renderer = Renderer::builder()
            .body_only(true)
            .max_nesting(4)
            .template("my-a", |_| String::new())
            .build();

        assert!(renderer.config().body_only);
        assert_eq!(renderer.config().max_nesting, 4);
        assert!(renderer.registry().contains("my-a"));
    }

    #[test]
    fn test_encoding_labels() {
        assert_eq!(encoding_for_label("UTF-8"), Some(encoding_rs::UTF_8));
        assert_eq!(encoding_for_label(" latin1 "), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_for_label("klingon"), None);
    }
}
