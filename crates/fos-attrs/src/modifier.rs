//! Attribute Modifiers
//!
//! Named, composable mutations of an [`AttributeSet`]. Some modifiers write
//! more than the attribute they are named after so linked attributes never
//! drift apart.

use crate::{
    error_reference, hint_reference, AttrError, AttributeName, AttributeSet, AttributeValue,
    ARIA_ERROR_ATTRIBUTE, ARIA_HINT_ATTRIBUTE,
};

/// A mutation applied to an attribute set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// Plain write
    Set(AttributeName, AttributeValue),
    /// Identity write, refreshes the error and hint references
    Id(String),
    /// Required flag plus its `aria-required` mirror
    Required(bool),
    /// `aria-invalid="true"`
    Invalid,
    /// Removal
    Unset(String),
}

impl Modifier {
    /// Build the modifier for `name`, picking the linked transform for `id`
    /// and `required`.
    ///
    /// # Panics
    ///
    /// Panics on an unsupported name or a value of the wrong kind for a
    /// transformed attribute.
    pub fn attr(name: &str, value: impl Into<AttributeValue>) -> Self {
        match Self::try_attr(name, value) {
            Ok(modifier) => modifier,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible variant of [`Modifier::attr`]
    pub fn try_attr(name: &str, value: impl Into<AttributeValue>) -> Result<Self, AttrError> {
        let name = AttributeName::parse(name)?;
        let value = value.into();

        match name.as_str() {
            "id" => match value {
                AttributeValue::Text(id) => Ok(Self::Id(id)),
                AttributeValue::Bool(_) => Err(AttrError::UnexpectedValue {
                    name: name.into_string(),
                    expected: "string",
                }),
            },
            "required" => match value {
                AttributeValue::Bool(flag) => Ok(Self::Required(flag)),
                AttributeValue::Text(_) => Err(AttrError::UnexpectedValue {
                    name: name.into_string(),
                    expected: "boolean",
                }),
            },
            _ => Ok(Self::Set(name, value)),
        }
    }

    pub fn id(value: impl AsRef<str>) -> Self {
        Self::Id(value.as_ref().trim().to_string())
    }

    pub fn required(value: bool) -> Self {
        Self::Required(value)
    }

    pub fn invalid() -> Self {
        Self::Invalid
    }

    pub fn unset(name: impl AsRef<str>) -> Self {
        Self::Unset(name.as_ref().trim().to_lowercase())
    }

    /// Apply to an attribute set
    pub fn apply(&self, attrs: &mut AttributeSet) {
        match self {
            Self::Set(name, value) => attrs.insert(name.as_str(), value.clone()),
            Self::Id(id) => {
                attrs.insert("id", AttributeValue::Text(id.clone()));
                attrs.insert(ARIA_ERROR_ATTRIBUTE, AttributeValue::Text(error_reference(id)));
                if attrs.contains(ARIA_HINT_ATTRIBUTE) {
                    attrs.insert(ARIA_HINT_ATTRIBUTE, AttributeValue::Text(hint_reference(id)));
                }
            }
            Self::Required(flag) => {
                attrs.insert("required", AttributeValue::Bool(*flag));
                attrs.insert("aria-required", AttributeValue::Text(flag.to_string()));
            }
            Self::Invalid => attrs.insert("aria-invalid", AttributeValue::Text("true".into())),
            Self::Unset(name) => {
                attrs.unset(name);
            }
        }
    }
}

/// Shorthand for [`Modifier::attr`]
pub fn attr(name: &str, value: impl Into<AttributeValue>) -> Modifier {
    Modifier::attr(name, value)
}
