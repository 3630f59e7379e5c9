//! Attribute Names
//!
//! Allow-list of standard attribute names plus the open `data-*` and
//! `aria-*` namespaces.

use std::fmt;

use crate::AttrError;

/// Standard attribute names accepted outright, sorted
const KNOWN_ATTRIBUTES: &[&str] = &[
    "accept",
    "accept-charset",
    "accesskey",
    "action",
    "alt",
    "autocomplete",
    "autofocus",
    "checked",
    "class",
    "cols",
    "content",
    "contenteditable",
    "dir",
    "disabled",
    "draggable",
    "enctype",
    "hidden",
    "href",
    "id",
    "label",
    "lang",
    "list",
    "max",
    "maxlength",
    "method",
    "min",
    "minlength",
    "multiple",
    "name",
    "novalidate",
    "pattern",
    "placeholder",
    "readonly",
    "required",
    "role",
    "rows",
    "selected",
    "size",
    "spellcheck",
    "step",
    "style",
    "tabindex",
    "target",
    "title",
    "type",
    "value",
];

/// Validated, normalized attribute name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeName(String);

impl AttributeName {
    /// Trim, lowercase and validate a raw name
    pub fn parse(raw: &str) -> Result<Self, AttrError> {
        let name = raw.trim().to_lowercase();
        if Self::is_supported(&name) {
            Ok(Self(name))
        } else {
            Err(AttrError::UnsupportedName(name))
        }
    }

    /// Check a normalized name against the allow-list and open namespaces
    pub fn is_supported(name: &str) -> bool {
        KNOWN_ATTRIBUTES.binary_search(&name).is_ok()
            || name.starts_with("data-")
            || name.starts_with("aria-")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
