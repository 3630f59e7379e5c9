//! Form Element Implementation
//!
//! A single form control: attributes plus label, hint, error and options.

use std::borrow::Cow;

use fos_attrs::{
    attr, generate_id, hint_reference, AttributeSet, AttributeValue, Modifier,
    ARIA_HINT_ATTRIBUTE,
};
use fos_templates::{context, Markup, TemplateName, TemplateRegistry, Value};
use serde::Serialize;

/// Semantic kind of a form control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Email,
    Password,
    Tel,
    Number,
    Search,
    Url,
    Color,
    Range,
    Date,
    DateTimeLocal,
    Datetime,
    Time,
    Month,
    Week,
    File,
    Checkbox,
    Radio,
    Hidden,
    Submit,
    Button,
    Reset,
    Image,
    Textarea,
    Select,
}

impl ElementKind {
    /// Input `type` or tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Search => "search",
            Self::Url => "url",
            Self::Color => "color",
            Self::Range => "range",
            Self::Date => "date",
            Self::DateTimeLocal => "datetime-local",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::Month => "month",
            Self::Week => "week",
            Self::File => "file",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Hidden => "hidden",
            Self::Submit => "submit",
            Self::Button => "button",
            Self::Reset => "reset",
            Self::Image => "image",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }

    /// Rendered as an `<input>` with a `type` attribute
    pub fn is_input(&self) -> bool {
        !matches!(self, Self::Textarea | Self::Select)
    }

    /// Template shape used to render this kind
    pub fn template(&self) -> TemplateName {
        match self {
            Self::Checkbox => TemplateName::Checkbox,
            Self::Radio => TemplateName::Radio,
            Self::Select => TemplateName::Select,
            Self::Textarea => TemplateName::Textarea,
            Self::Submit | Self::Reset | Self::Button => TemplateName::Button,
            _ => TemplateName::Input,
        }
    }
}

/// Choice in a select element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.trim().to_string(),
            value: value.trim().to_string(),
        }
    }
}

/// Shorthand for [`SelectOption::new`]
pub fn option(label: &str, value: &str) -> SelectOption {
    SelectOption::new(label, value)
}

fn default_modifiers() -> [Modifier; 2] {
    [attr("aria-invalid", "false"), attr("aria-required", "false")]
}

/// Form control
#[derive(Debug, Clone)]
pub struct Element {
    kind: ElementKind,
    label: String,
    hint: String,
    error: String,
    options: Vec<SelectOption>,
    attributes: AttributeSet,
}

macro_rules! kind_constructors {
    ($($fn_name:ident => $kind:ident),* $(,)?) => {
        impl Element {
            $(
                pub fn $fn_name(name: &str) -> Self {
                    Self::new(ElementKind::$kind, name)
                }
            )*
        }
    };
}

kind_constructors! {
    text => Text,
    email => Email,
    password => Password,
    phone => Tel,
    number => Number,
    search => Search,
    url => Url,
    color => Color,
    range => Range,
    date => Date,
    datetime_local => DateTimeLocal,
    datetime => Datetime,
    time => Time,
    month => Month,
    week => Week,
    file => File,
    checkbox => Checkbox,
    radio => Radio,
    hidden => Hidden,
    submit => Submit,
    button => Button,
    reset => Reset,
    image => Image,
    textarea => Textarea,
    select => Select,
}

impl Element {
    /// Create an element of `kind` for the field `name`, with a generated id
    pub fn new(kind: ElementKind, name: &str) -> Self {
        let mut attributes = AttributeSet::new();
        if kind.is_input() {
            attributes.set("type", kind.as_str());
        }
        attributes.set("name", name).set("id", generate_id());
        attributes.apply(default_modifiers());

        Self {
            kind,
            label: String::new(),
            hint: String::new(),
            error: String::new(),
            options: Vec::new(),
            attributes,
        }
    }

    // Builder methods

    pub fn with_label(mut self, label: &str) -> Self {
        self.set_label(label);
        self
    }

    pub fn with_hint(mut self, hint: &str) -> Self {
        self.set_hint(hint);
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.set_error(error);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.set_options(options);
        self
    }

    pub fn with_attributes(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.set_attributes(modifiers);
        self
    }

    /// Set one attribute.
    ///
    /// # Panics
    ///
    /// Panics on an unsupported attribute name, see [`AttributeSet::set`].
    pub fn with_attribute(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attributes([Modifier::id(id)])
    }

    pub fn required(self, required: bool) -> Self {
        self.with_attributes([Modifier::required(required)])
    }

    // In-place mutators

    pub fn set_label(&mut self, label: &str) -> &mut Self {
        self.label = label.trim().to_string();
        self
    }

    /// Set the hint; a non-empty hint links it through `aria-describedby`
    pub fn set_hint(&mut self, hint: &str) -> &mut Self {
        self.hint = hint.trim().to_string();
        if self.hint.is_empty() {
            self.attributes.unset(ARIA_HINT_ATTRIBUTE);
        } else {
            let reference = hint_reference(self.id());
            self.attributes.set(ARIA_HINT_ATTRIBUTE, reference);
        }
        self
    }

    pub fn set_error(&mut self, error: &str) -> &mut Self {
        self.error = error.trim().to_string();
        self
    }

    pub fn set_value(&mut self, value: &str) -> &mut Self {
        self.attributes.set("value", value);
        self
    }

    /// Replace the option list
    pub fn set_options(&mut self, options: impl IntoIterator<Item = SelectOption>) -> &mut Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn set_attributes(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.attributes.apply(modifiers);
        self
    }

    /// Raise `aria-invalid`. Nothing lowers it again.
    pub fn mark_invalid(&mut self) -> &mut Self {
        Modifier::invalid().apply(&mut self.attributes);
        self
    }

    // Queries

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        self.attributes.get_str("id")
    }

    pub fn name(&self) -> &str {
        self.attributes.get_str("name")
    }

    pub fn value(&self) -> &str {
        self.attributes.get_str("value")
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> &AttributeValue {
        self.attributes.get(name)
    }

    pub fn is_required(&self) -> bool {
        self.attributes.get_bool("required")
    }

    /// Valid when not required or when a value is present.
    ///
    /// `pattern` and type-specific formats are not checked.
    pub fn is_valid(&self) -> bool {
        !self.is_required() || !self.value().is_empty()
    }

    // Rendering

    /// Render through the template of this element's shape
    pub fn render(&self, registry: &TemplateRegistry) -> Markup {
        let template = self.kind.template();
        // select and textarea carry their value in content, not as an attribute
        let attributes = match template {
            TemplateName::Select | TemplateName::Textarea => {
                Cow::Owned(self.attributes.without("value"))
            }
            _ => Cow::Borrowed(&self.attributes),
        };

        registry.render(
            template,
            context! {
                id => self.id(),
                name => self.name(),
                kind => self.kind.as_str(),
                label => &self.label,
                value => self.value(),
                required => self.is_required(),
                valid => self.is_valid(),
                options => &self.options,
                attributes => Value::from_serialize(&attributes),
                error => Value::from(self.render_error(registry)),
                hint => Value::from(self.render_hint(registry)),
            },
        )
    }

    pub fn render_error(&self, registry: &TemplateRegistry) -> Markup {
        registry.render(
            TemplateName::Error,
            context! { id => self.id(), error => &self.error },
        )
    }

    pub fn render_hint(&self, registry: &TemplateRegistry) -> Markup {
        registry.render(
            TemplateName::Hint,
            context! { id => self.id(), hint => &self.hint },
        )
    }
}
