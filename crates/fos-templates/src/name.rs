//! Template Names

use std::fmt;

/// Lookup name of a template shape.
///
/// Override sets customize rendering by registering templates under exactly
/// these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Input,
    Checkbox,
    Radio,
    Select,
    Textarea,
    Button,
    Form,
    FieldSet,
    Group,
    Error,
    Hint,
}

impl TemplateName {
    pub const ALL: [TemplateName; 11] = [
        Self::Input,
        Self::Checkbox,
        Self::Radio,
        Self::Select,
        Self::Textarea,
        Self::Button,
        Self::Form,
        Self::FieldSet,
        Self::Group,
        Self::Error,
        Self::Hint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Button => "button",
            Self::Form => "form",
            Self::FieldSet => "fieldset",
            Self::Group => "group",
            Self::Error => "error",
            Self::Hint => "hint",
        }
    }

    /// Built-in source for this shape
    pub(crate) fn builtin_source(&self) -> &'static str {
        match self {
            Self::Input => include_str!("../templates/input.html"),
            Self::Checkbox => include_str!("../templates/checkbox.html"),
            Self::Radio => include_str!("../templates/radio.html"),
            Self::Select => include_str!("../templates/select.html"),
            Self::Textarea => include_str!("../templates/textarea.html"),
            Self::Button => include_str!("../templates/button.html"),
            Self::Form => include_str!("../templates/form.html"),
            Self::FieldSet => include_str!("../templates/fieldset.html"),
            Self::Group => include_str!("../templates/group.html"),
            Self::Error => include_str!("../templates/error.html"),
            Self::Hint => include_str!("../templates/hint.html"),
        }
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
