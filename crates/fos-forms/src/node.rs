//! Form Tree Nodes
//!
//! Children of a container are either elements or nested containers.

use fos_templates::{Markup, TemplateRegistry};

use crate::{Element, FieldSet, Group};

/// Ordered child list of a group, fieldset or form
pub trait Container {
    fn children(&self) -> &[Node];

    fn children_mut(&mut self) -> &mut [Node];
}

/// Child of a container
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Group(Group),
    FieldSet(FieldSet),
}

impl Node {
    pub fn render(&self, registry: &TemplateRegistry) -> Markup {
        match self {
            Self::Element(element) => element.render(registry),
            Self::Group(group) => group.render(registry),
            Self::FieldSet(fieldset) => fieldset.render(registry),
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Children of a container node; elements have none
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element(_) => &[],
            Self::Group(group) => group.children(),
            Self::FieldSet(fieldset) => fieldset.children(),
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Self::Element(_) => &mut [],
            Self::Group(group) => group.children_mut(),
            Self::FieldSet(fieldset) => fieldset.children_mut(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<FieldSet> for Node {
    fn from(fieldset: FieldSet) -> Self {
        Self::FieldSet(fieldset)
    }
}

/// Render children in order
pub(crate) fn render_children(
    children: &[Node],
    registry: &TemplateRegistry,
) -> Vec<fos_templates::Value> {
    children
        .iter()
        .map(|child| child.render(registry).into())
        .collect()
}
