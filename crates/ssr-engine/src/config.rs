//! Renderer Configuration

use serde::Deserialize;

/// Renderer configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Return only the inner markup of `<body>` instead of the whole document
    pub body_only: bool,

    /// Maximum number of custom elements expanded inside one another
    pub max_nesting: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            body_only: false,
            max_nesting: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: RendererConfig = toml::from_str("body_only = true").unwrap();

        assert!(config.body_only);
        assert_eq!(config.max_nesting, RendererConfig::default().max_nesting);
    }
}
