//! Template Registry
//!
//! Resolves a template by name: the override set first, then the built-in
//! set. Resolution problems never abort rendering; they show up in the
//! markup instead.

use std::fmt::Write;

use minijinja::{AutoEscape, Environment, Output, State, Value};
use serde::Serialize;

use crate::attributes::{escape, form_attributes};
use crate::{Markup, TemplateError, TemplateName};

/// Built-in templates plus an optional caller-supplied override set.
///
/// Built once at startup and shared by reference; it is immutable after
/// construction.
#[derive(Debug)]
pub struct TemplateRegistry {
    base: Environment<'static>,
    overrides: Option<Environment<'static>>,
}

impl TemplateRegistry {
    /// Registry with the built-in templates only.
    ///
    /// # Panics
    ///
    /// Panics if a built-in template fails to parse.
    pub fn new() -> Self {
        let mut base = environment();
        for name in TemplateName::ALL {
            if let Err(err) = base.add_template(name.as_str(), name.builtin_source()) {
                panic!("built-in template {name} is malformed: {err}");
            }
        }
        tracing::debug!("Loaded {} built-in templates", TemplateName::ALL.len());

        Self {
            base,
            overrides: None,
        }
    }

    /// Registry whose `(name, source)` templates take precedence over the
    /// built-in ones
    pub fn with_overrides<I, N, S>(templates: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        let mut overrides = environment();
        let mut count = 0usize;

        for (name, source) in templates {
            let name = name.into();
            overrides
                .add_template_owned(name.clone(), source.into())
                .map_err(|source| TemplateError::Parse { name, source })?;
            count += 1;
        }

        tracing::debug!("Loaded {} override templates", count);
        registry.overrides = Some(overrides);
        Ok(registry)
    }

    /// Check whether `name` resolves to an override template
    pub fn has_override(&self, name: &str) -> bool {
        self.overrides
            .as_ref()
            .is_some_and(|env| env.get_template(name).is_ok())
    }

    /// Render `name` against `data`.
    ///
    /// A template missing from both sets renders a placeholder naming it; an
    /// execution failure renders the error text.
    pub fn render<S: Serialize>(&self, name: impl AsRef<str>, data: S) -> Markup {
        let name = name.as_ref();
        let template = self
            .overrides
            .as_ref()
            .and_then(|env| env.get_template(name).ok())
            .or_else(|| self.base.get_template(name).ok());

        let Some(template) = template else {
            tracing::warn!("Template {} was not found", name);
            return Markup::new(format!("template {name} was not found"));
        };

        match template.render(data) {
            Ok(html) => Markup::new(html),
            Err(err) => {
                tracing::warn!("Template {} failed: {}", name, err);
                Markup::new(err.to_string())
            }
        }
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_function("form_attributes", form_attributes);
    env.set_formatter(html_formatter);
    env
}

/// Escapes strings the same way attribute values are escaped, leaving `/`
/// untouched. Everything else goes through the default formatter.
fn html_formatter(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), minijinja::Error> {
    match value.as_str() {
        Some(text) if !value.is_safe() && matches!(state.auto_escape(), AutoEscape::Html) => {
            out.write_str(&escape(text)).map_err(minijinja::Error::from)
        }
        _ => minijinja::escape_formatter(out, state, value),
    }
}
