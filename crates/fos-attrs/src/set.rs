//! Attribute Set
//!
//! Attribute manipulation: get, set, unset. Entries are kept in ascending
//! name order so rendering is deterministic.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{AttrError, AttributeValue, Modifier};

static EMPTY: AttributeValue = AttributeValue::Text(String::new());

/// Attribute collection backing an element or container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeSet {
    entries: BTreeMap<String, AttributeValue>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by applying modifiers in order
    pub fn from_modifiers(modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut attrs = Self::new();
        attrs.apply(modifiers);
        attrs
    }

    /// Apply modifiers in order
    pub fn apply(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        for modifier in modifiers {
            modifier.apply(self);
        }
        self
    }

    /// Set an attribute, running the linked-attribute transforms for `id`
    /// and `required`.
    ///
    /// # Panics
    ///
    /// Panics if the name is not supported, if `id` is given a boolean or if
    /// `required` is given text.
    pub fn set(&mut self, name: &str, value: impl Into<AttributeValue>) -> &mut Self {
        Modifier::attr(name, value).apply(self);
        self
    }

    /// Fallible variant of [`AttributeSet::set`]
    pub fn try_set(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<&mut Self, AttrError> {
        let modifier = Modifier::try_attr(name, value)
            .inspect_err(|err| tracing::debug!("Rejected attribute: {}", err))?;
        modifier.apply(self);
        Ok(self)
    }

    /// Remove an attribute; missing names are ignored
    pub fn unset(&mut self, name: &str) -> &mut Self {
        self.entries.remove(name.trim().to_lowercase().as_str());
        self
    }

    /// Get a value; missing names read as empty text
    pub fn get(&self, name: &str) -> &AttributeValue {
        self.entries.get(name).unwrap_or(&EMPTY)
    }

    /// Get a text value; missing or boolean entries read as `""`
    pub fn get_str(&self, name: &str) -> &str {
        self.entries
            .get(name)
            .and_then(AttributeValue::as_str)
            .unwrap_or("")
    }

    /// Get a boolean value; missing or text entries read as `false`
    pub fn get_bool(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .and_then(AttributeValue::as_bool)
            .unwrap_or(false)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in ascending name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Copy of this set without one attribute
    pub fn without(&self, name: &str) -> Self {
        let mut copy = self.clone();
        copy.entries.remove(name);
        copy
    }

    /// Raw write, no validation or transforms
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.entries.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ARIA_ERROR_ATTRIBUTE, ARIA_HINT_ATTRIBUTE};

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = AttributeSet::new();
        attrs.set("class", " btn ").set("disabled", true);

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get_str("class"), "btn");
        assert!(attrs.get_bool("disabled"));
        assert_eq!(attrs.get("class"), &AttributeValue::Text("btn".into()));
    }

    #[test]
    fn test_reads_are_total() {
        let mut attrs = AttributeSet::new();
        attrs.set("class", "btn").set("hidden", true);

        assert_eq!(attrs.get("missing"), &AttributeValue::Text(String::new()));
        assert_eq!(attrs.get_str("missing"), "");
        assert!(!attrs.get_bool("missing"));
        assert_eq!(attrs.get_str("hidden"), "");
        assert!(!attrs.get_bool("class"));
    }

    #[test]
    fn test_name_is_normalized() {
        let mut attrs = AttributeSet::new();
        attrs.set("  PlaceHolder ", "Name");
        assert_eq!(attrs.get_str("placeholder"), "Name");
    }

    #[test]
    fn test_unset_attribute() {
        let mut attrs = AttributeSet::new();
        attrs.set("title", "x");

        assert!(attrs.contains("title"));
        attrs.unset("title").unset("never-set");
        assert!(!attrs.contains("title"));
    }

    #[test]
    fn test_id_links_error_and_hint() {
        let mut attrs = AttributeSet::new();
        attrs.set("id", "x");
        assert_eq!(attrs.get_str(ARIA_ERROR_ATTRIBUTE), "x-error");
        assert!(!attrs.contains(ARIA_HINT_ATTRIBUTE));

        attrs.set(ARIA_HINT_ATTRIBUTE, "x-hint");
        attrs.set("id", "y");
        assert_eq!(attrs.get_str("id"), "y");
        assert_eq!(attrs.get_str(ARIA_ERROR_ATTRIBUTE), "y-error");
        assert_eq!(attrs.get_str(ARIA_HINT_ATTRIBUTE), "y-hint");
    }

    #[test]
    fn test_required_mirrors_aria() {
        let mut attrs = AttributeSet::new();
        attrs.set("required", true);
        assert!(attrs.get_bool("required"));
        assert_eq!(attrs.get_str("aria-required"), "true");

        attrs.set("required", false);
        assert!(!attrs.get_bool("required"));
        assert_eq!(attrs.get_str("aria-required"), "false");
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut attrs = AttributeSet::new();
        attrs.set("name", "a").set("class", "b").set("aria-label", "c");

        let names: Vec<&str> = attrs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["aria-label", "class", "name"]);
    }

    #[test]
    fn test_without() {
        let mut attrs = AttributeSet::new();
        attrs.set("value", "v").set("name", "n");

        let copy = attrs.without("value");
        assert!(!copy.contains("value"));
        assert!(attrs.contains("value"));
    }

    #[test]
    fn test_try_set_rejects_unknown() {
        let mut attrs = AttributeSet::new();
        assert!(attrs.try_set("onclick", "x").is_err());
        assert!(attrs.is_empty());
    }

    #[test]
    #[should_panic(expected = "unsupported attribute onclick")]
    fn test_set_panics_on_unknown() {
        AttributeSet::new().set("onclick", "alert(1)");
    }
}
