//! ssr-cli - Render custom elements from the command line
//!
//! Templates are Handlebars files named after the custom element they
//! expand (`my-card.hbs`), rendered with the element's attributes as context.

mod config;
mod templates;

pub use config::{FileConfig, Settings};
pub use templates::{HandlebarsTemplate, load_templates};
