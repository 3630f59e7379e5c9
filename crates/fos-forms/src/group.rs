//! Group Container
//!
//! Decoration-only wrapper around a run of children.

use fos_attrs::{AttributeSet, Modifier};
use fos_templates::{context, Markup, TemplateName, TemplateRegistry, Value};

use crate::node::render_children;
use crate::{Container, Node};

/// Group of nodes rendered inside a `role="group"` wrapper
#[derive(Debug, Clone)]
pub struct Group {
    children: Vec<Node>,
    attributes: AttributeSet,
}

impl Group {
    pub fn new() -> Self {
        let mut attributes = AttributeSet::new();
        attributes.set("role", "group");

        Self {
            children: Vec::new(),
            attributes,
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

    pub fn render(&self, registry: &TemplateRegistry) -> Markup {
        registry.render(
            TemplateName::Group,
            context! {
                attributes => Value::from_serialize(&self.attributes),
                children => render_children(&self.children, registry),
            },
        )
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Container for Group {
    fn children(&self) -> &[Node] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }
}
