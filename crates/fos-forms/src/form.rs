//! Form Container
//!
//! Top-level container: attributes, an error slot, configuration and the
//! element lookup used by population and binding.

use std::collections::{BTreeMap, HashMap};

use fos_attrs::{
    attr, error_reference, generate_id, AttributeSet, Modifier, ARIA_ERROR_ATTRIBUTE,
};
use fos_templates::{context, Markup, TemplateName, TemplateRegistry, Value};

use crate::node::render_children;
use crate::{Container, Element, FormConfig, Node};

/// Default submission method
pub const METHOD_POST: &str = "POST";

/// `enctype` for file uploads
pub const MULTIPART_DATA: &str = "multipart/form-data";

/// Default `enctype`
pub const URL_ENCODED_DATA: &str = "application/x-www-form-urlencoded";

/// Form element
#[derive(Debug, Clone)]
pub struct Form {
    error: String,
    children: Vec<Node>,
    attributes: AttributeSet,
    config: FormConfig,
}

impl Form {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a form posting URL-encoded data, with a generated id
    pub fn with_config(config: FormConfig) -> Self {
        let attributes = AttributeSet::from_modifiers([
            Modifier::id(generate_id()),
            attr("method", METHOD_POST),
            attr("enctype", URL_ENCODED_DATA),
        ]);

        let mut form = Self {
            error: String::new(),
            children: Vec::new(),
            attributes,
            config,
        };
        form.sync_error_link();
        form
    }

    pub fn id(&self) -> &str {
        self.attributes.get_str("id")
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.set_error(error);
        self
    }

    /// Set the form-level error; `aria-errormessage` follows it
    pub fn set_error(&mut self, error: &str) -> &mut Self {
        self.error = error.trim().to_string();
        self.sync_error_link();
        self
    }

    pub fn with_attributes(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.set_attributes(modifiers);
        self
    }

    pub fn set_attributes(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.attributes.apply(modifiers);
        self.sync_error_link();
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn add_child(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    // Setting `id` always writes the error link, so it is re-derived here
    fn sync_error_link(&mut self) {
        if self.error.is_empty() {
            self.attributes.unset(ARIA_ERROR_ATTRIBUTE);
        } else {
            let reference = error_reference(self.id());
            self.attributes.set(ARIA_ERROR_ATTRIBUTE, reference);
        }
    }

    /// Elements keyed by field name.
    ///
    /// Direct elements and the elements of direct child containers are
    /// collected; containers nested deeper are not traversed. A later element
    /// replaces an earlier one with the same name.
    pub fn elements(&self) -> HashMap<String, &Element> {
        let mut elements = HashMap::new();
        for child in &self.children {
            let nested = match child {
                Node::Element(element) => {
                    elements.insert(element.name().to_string(), element);
                    continue;
                }
                Node::Group(group) => group.children(),
                Node::FieldSet(fieldset) => fieldset.children(),
            };
            // TODO: recurse once a collision policy for duplicate names across levels exists
            for element in nested.iter().filter_map(Node::as_element) {
                elements.insert(element.name().to_string(), element);
            }
        }
        elements
    }

    /// Mutable variant of [`Form::elements`]
    pub fn elements_mut(&mut self) -> HashMap<String, &mut Element> {
        let mut elements = HashMap::new();
        for child in self.children.iter_mut() {
            let nested = match child {
                Node::Element(element) => {
                    elements.insert(element.name().to_string(), element);
                    continue;
                }
                Node::Group(group) => group.children_mut(),
                Node::FieldSet(fieldset) => fieldset.children_mut(),
            };
            for element in nested.iter_mut().filter_map(Node::as_element_mut) {
                elements.insert(element.name().to_string(), element);
            }
        }
        elements
    }

    pub fn is_valid(&self) -> bool {
        self.elements().values().all(|element| element.is_valid())
    }

    /// Failing elements keyed by field name
    pub fn validation_errors(&self) -> BTreeMap<String, String> {
        self.elements()
            .into_iter()
            .filter(|(_, element)| !element.is_valid())
            .map(|(name, _)| (name, "Invalid value".to_string()))
            .collect()
    }

    /// Mark every failing element invalid; returns how many failed
    pub fn revalidate(&mut self) -> usize {
        let mut invalid = 0;
        for element in self.elements_mut().into_values() {
            if !element.is_valid() {
                element.mark_invalid();
                invalid += 1;
            }
        }
        invalid
    }

    pub fn render(&self, registry: &TemplateRegistry) -> Markup {
        registry.render(
            TemplateName::Form,
            context! {
                id => self.id(),
                attributes => Value::from_serialize(&self.attributes),
                error => Value::from(self.render_error(registry)),
                children => render_children(&self.children, registry),
            },
        )
    }

    pub fn render_error(&self, registry: &TemplateRegistry) -> Markup {
        registry.render(
            TemplateName::Error,
            context! { id => self.id(), error => &self.error },
        )
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for Form {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldSet, Group};

    #[test]
    fn test_form_defaults() {
        let form = Form::new();

        assert_eq!(form.attributes().get_str("method"), "POST");
        assert_eq!(form.attributes().get_str("enctype"), URL_ENCODED_DATA);
        assert!(!form.id().is_empty());
        assert!(!form.attributes().contains(ARIA_ERROR_ATTRIBUTE));
        assert_eq!(form.config(), &FormConfig::default());
    }

    #[test]
    fn test_error_link_follows_error() {
        let mut form = Form::new().with_attributes([Modifier::id("login")]);
        assert!(!form.attributes().contains(ARIA_ERROR_ATTRIBUTE));

        form.set_error("Please fill in all required fields.");
        assert_eq!(form.attributes().get_str(ARIA_ERROR_ATTRIBUTE), "login-error");

        form.set_attributes([Modifier::id("signin")]);
        assert_eq!(form.attributes().get_str(ARIA_ERROR_ATTRIBUTE), "signin-error");

        form.set_error("  ");
        assert!(!form.attributes().contains(ARIA_ERROR_ATTRIBUTE));
    }

    #[test]
    fn test_elements_one_level_deep() {
        let form = Form::new()
            .with_child(Element::text("x"))
            .with_child(
                FieldSet::new("inner")
                    .with_child(Element::text("y"))
                    .with_child(Element::text("z"))
                    .with_child(Group::new().with_child(Element::text("deep"))),
            );

        let mut names: Vec<String> = form.elements().into_keys().collect();
        names.sort();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_duplicate_names_last_wins() {
        let form = Form::new()
            .with_child(Element::text("dup").with_id("first"))
            .with_child(Element::text("dup").with_id("second"));

        assert_eq!(form.elements()["dup"].id(), "second");
    }

    #[test]
    fn test_validation_errors() {
        let mut form = Form::new()
            .with_child(Element::text("name").required(true))
            .with_child(Element::text("nickname"));

        assert!(!form.is_valid());
        let errors = form.validation_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["name"], "Invalid value");

        assert_eq!(form.revalidate(), 1);
        assert_eq!(form.elements()["name"].attributes().get_str("aria-invalid"), "true");
        assert_eq!(form.elements()["nickname"].attributes().get_str("aria-invalid"), "false");
    }
}
