//! Templates and the template registry
//!
//! A template turns the attributes of a custom element into markup. The
//! registry maps tag names to templates and is frozen once handed to a
//! `Renderer`.

use std::collections::HashMap;
use std::fmt;

/// Attributes of the element being expanded, name to raw value
pub type Attributes = HashMap<String, String>;

/// Error raised by a template while rendering
pub type TemplateError = Box<dyn std::error::Error + Send + Sync>;

/// Markup-producing capability for one custom element tag.
///
/// Implementations must be free of side effects: a registry may be shared by
/// concurrent `render` calls.
pub trait Template: Send + Sync {
    fn render(&self, attrs: &Attributes) -> Result<String, TemplateError>;
}

impl<F> Template for F
where
    F: Fn(&Attributes) -> String + Send + Sync,
{
    fn render(&self, attrs: &Attributes) -> Result<String, TemplateError> {
        Ok(self(attrs))
    }
}

/// Adapter for templates that can fail
pub struct TryTemplate<F>(pub F);

impl<F, E> Template for TryTemplate<F>
where
    F: Fn(&Attributes) -> Result<String, E> + Send + Sync,
    E: Into<TemplateError>,
{
    fn render(&self, attrs: &Attributes) -> Result<String, TemplateError> {
        (self.0)(attrs).map_err(Into::into)
    }
}

/// Tag name to template mapping
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Box<dyn Template>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any previous one for `tag`
    pub fn insert(&mut self, tag: impl Into<String>, template: impl Template + 'static) {
        self.templates.insert(tag.into(), Box::new(template));
    }

    /// Builder-style registration of a closure template
    pub fn with<F>(mut self, tag: impl Into<String>, template: F) -> Self
    where
        F: Fn(&Attributes) -> String + Send + Sync + 'static,
    {
        self.insert(tag, template);
        self
    }

    /// Look up the template for a tag
    pub fn get(&self, tag: &str) -> Option<&dyn Template> {
        self.templates.get(tag).map(|t| t.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.templates.contains_key(tag)
    }

    /// Registered tag names, in no particular order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.tags().collect();
        tags.sort_unstable();
        f.debug_struct("TemplateRegistry").field("tags", &tags).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_template() {
        let registry = TemplateRegistry::new().with("my-greeting", |attrs| {
            format!("<p>Hello {}</p>", attrs.get("name").map_or("you", String::as_str))
        });

        let template = registry.get("my-greeting").unwrap();
        let mut attrs = Attributes::new();
        attrs.insert("name".to_string(), "Ada".to_string());

        assert_eq!(template.render(&attrs).unwrap(), "<p>Hello Ada</p>");
        assert_eq!(template.render(&Attributes::new()).unwrap(), "<p>Hello you</p>");
    }

    #[test]
    fn test_fallible_template() {
        let mut registry = TemplateRegistry::new();
        registry.insert(
            "my-strict",
            TryTemplate(|attrs: &Attributes| match attrs.get("id") {
                Some(id) => Ok(format!("<b>{id}</b>")),
                None => Err("missing id"),
            }),
        );

        let template = registry.get("my-strict").unwrap();
        let err = template.render(&Attributes::new()).unwrap_err();
        assert_eq!(err.to_string(), "missing id");
    }

    #[test]
    fn test_registry_lookup() {
        let registry = TemplateRegistry::new()
            .with("a-b", |_| String::new())
            .with("c-d", |_| String::new());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("a-b"));
        assert!(registry.get("e-f").is_none());
        assert_eq!(format!("{registry:?}"), r#"TemplateRegistry { tags: ["a-b", "c-d"] }"#);
    }
}
