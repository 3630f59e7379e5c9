//! fOS Attributes
//!
//! Attribute model for form markup: validated names, boolean-or-text values,
//! composable modifiers and linked ARIA attributes.

mod id;
mod modifier;
mod name;
mod set;
mod value;

pub use id::{generate_id, ID_ALPHABET, ID_LENGTH};
pub use modifier::{attr, Modifier};
pub use name::AttributeName;
pub use set::AttributeSet;
pub use value::AttributeValue;

/// Attribute linking a control to its hint text
pub const ARIA_HINT_ATTRIBUTE: &str = "aria-describedby";

/// Attribute linking a control to its error message
pub const ARIA_ERROR_ATTRIBUTE: &str = "aria-errormessage";

/// Id of the hint element belonging to `id`
pub fn hint_reference(id: &str) -> String {
    format!("{id}-hint")
}

/// Id of the error element belonging to `id`
pub fn error_reference(id: &str) -> String {
    format!("{id}-error")
}

/// Attribute error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttrError {
    #[error("unsupported attribute {0}")]
    UnsupportedName(String),

    #[error("attribute {name} expects a {expected} value")]
    UnexpectedValue { name: String, expected: &'static str },
}
