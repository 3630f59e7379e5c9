//! FieldSet Container

use fos_attrs::{AttributeSet, Modifier};
use fos_templates::{context, Markup, TemplateName, TemplateRegistry, Value};

use crate::node::render_children;
use crate::{Container, Node};

/// `<fieldset>` with an optional legend
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    legend: String,
    children: Vec<Node>,
    attributes: AttributeSet,
}

impl FieldSet {
    pub fn new(legend: &str) -> Self {
        Self {
            legend: legend.trim().to_string(),
            ..Default::default()
        }
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

    pub fn with_attributes(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.set_attributes(modifiers);
        self
    }

    pub fn set_attributes(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.attributes.apply(modifiers);
        self
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn render(&self, registry: &TemplateRegistry) -> Markup {
        registry.render(
            TemplateName::FieldSet,
            context! {
                legend => &self.legend,
                attributes => Value::from_serialize(&self.attributes),
                children => render_children(&self.children, registry),
            },
        )
    }
}

impl Container for FieldSet {
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
    use crate::Element;

    #[test]
    fn test_legend_and_children() {
        let fieldset = FieldSet::new(" Login ")
            .with_child(Element::text("username"))
            .with_child(Element::password("password"));

        assert_eq!(fieldset.legend(), "Login");
        assert_eq!(fieldset.children().len(), 2);
        assert!(fieldset.attributes().is_empty());
    }

    #[test]
    fn test_render_without_attributes() {
        let registry = TemplateRegistry::new();
        let html = FieldSet::new("Account").render(&registry);
        assert_eq!(html.as_str(), "<fieldset><legend>Account</legend></fieldset>");
    }

    #[test]
    fn test_render_children_in_order() {
        let registry = TemplateRegistry::new();
        let html = FieldSet::new("")
            .with_child(Element::text("first"))
            .with_child(Element::text("second"))
            .render(&registry);

        let first = html.as_str().find(r#"name="first""#).unwrap();
        let second = html.as_str().find(r#"name="second""#).unwrap();
        assert!(first < second);
        assert!(!html.as_str().contains("<legend>"));
    }
}
