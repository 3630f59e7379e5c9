//! fOS Templates
//!
//! Template resolution for form markup. Every element and container shape is
//! rendered by a named template; callers may register override templates
//! under the same names.
//!
//! Templates see a `form_attributes(map)` function that renders an
//! attribute map into start-tag text.

mod attributes;
mod markup;
mod name;
mod registry;

pub use attributes::{escape, render_attributes};
pub use markup::Markup;
pub use name::TemplateName;
pub use registry::TemplateRegistry;

pub use minijinja::{context, Value};

/// Template error
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("failed to parse template {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}
