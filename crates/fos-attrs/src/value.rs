//! Attribute Values

use serde::Serialize;

/// Attribute value: a boolean flag or a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Text(String),
}

impl AttributeValue {
    /// Text value, trimmed
    pub fn text(value: impl AsRef<str>) -> Self {
        Self::Text(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            Self::Text(_) => None,
        }
    }
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        // Avoid reallocating when nothing needs trimming
        if value.trim().len() == value.len() {
            Self::Text(value)
        } else {
            Self::text(value)
        }
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        Self::text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(AttributeValue::from("  hello "), AttributeValue::Text("hello".into()));
        assert_eq!(AttributeValue::from(String::from("\tx\n")), AttributeValue::Text("x".into()));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
        assert_eq!(AttributeValue::from(true).as_str(), None);
        assert_eq!(AttributeValue::from("a").as_str(), Some("a"));
        assert_eq!(AttributeValue::from("a").as_bool(), None);
    }
}
