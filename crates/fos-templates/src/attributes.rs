//! Attribute Rendering
//!
//! Serializes an attribute map into the text that goes inside a start tag.

use minijinja::value::ValueKind;
use minijinja::Value;

/// Render attributes in ascending name order.
///
/// `true` renders as the bare name, `false` and empty text are omitted, text
/// renders as `name="value"`. Any other value kind renders an inline
/// diagnostic naming the attribute and the remaining entries still render.
pub fn render_attributes(attributes: &Value) -> String {
    if attributes.kind() != ValueKind::Map {
        return String::new();
    }

    let mut entries: Vec<(String, Value)> = match attributes.try_iter() {
        Ok(keys) => keys
            .map(|key| {
                let value = attributes.get_item(&key).unwrap_or_default();
                (key.to_string(), value)
            })
            .collect(),
        Err(_) => return String::new(),
    };
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    for (name, value) in &entries {
        match value.kind() {
            ValueKind::Bool => {
                if value.is_true() {
                    out.push_str(&escape(name));
                    out.push(' ');
                }
            }
            ValueKind::String => {
                let text = value.as_str().unwrap_or_default();
                if !text.is_empty() {
                    out.push_str(&format!("{}=\"{}\" ", escape(name), escape(text)));
                }
            }
            kind => out.push_str(&format!(
                "attribute {} has an unsupported data type {}, only boolean & string are allowed ",
                escape(name),
                kind_name(kind)
            )),
        }
    }

    out.trim_end().to_string()
}

/// Template function wrapper around [`render_attributes`]
pub(crate) fn form_attributes(attributes: Value) -> Value {
    Value::from_safe_string(render_attributes(&attributes))
}

/// Escape text for use in markup
pub fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

fn kind_name(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Undefined => "undefined",
        ValueKind::None => "none",
        ValueKind::Number => "number",
        ValueKind::Bytes => "bytes",
        ValueKind::Seq => "sequence",
        ValueKind::Map => "map",
        _ => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn attrs(entries: &[(&str, Value)]) -> Value {
        let map: BTreeMap<String, Value> = entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Value::from_serialize(&map)
    }

    #[test]
    fn test_empty_attributes() {
        assert_eq!(render_attributes(&attrs(&[])), "");
        assert_eq!(render_attributes(&Value::UNDEFINED), "");
    }

    #[test]
    fn test_string_attributes_sorted() {
        let value = attrs(&[
            ("name", Value::from("username")),
            ("class", Value::from("form-control")),
            ("id", Value::from("user-field")),
        ]);
        assert_eq!(
            render_attributes(&value),
            r#"class="form-control" id="user-field" name="username""#
        );
    }

    #[test]
    fn test_boolean_attributes() {
        let value = attrs(&[
            ("required", Value::from(true)),
            ("disabled", Value::from(false)),
            ("readonly", Value::from(true)),
        ]);
        assert_eq!(render_attributes(&value), "readonly required");
    }

    #[test]
    fn test_empty_strings_skipped() {
        let value = attrs(&[
            ("name", Value::from("username")),
            ("placeholder", Value::from("")),
            ("class", Value::from("form-control")),
        ]);
        assert_eq!(render_attributes(&value), r#"class="form-control" name="username""#);
    }

    #[test]
    fn test_escaping() {
        let value = attrs(&[
            ("data-test", Value::from("<script>alert('xss')</script>")),
            ("class", Value::from("user&admin")),
            ("<onclick>", Value::from("malicious")),
        ]);
        let out = render_attributes(&value);
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("user&amp;admin"));
        assert!(out.contains("&lt;onclick&gt;"));
    }

    #[test]
    fn test_unsupported_kinds_reported_inline() {
        let value = attrs(&[
            ("name", Value::from("username")),
            ("number", Value::from(42)),
            ("slice", Value::from(vec!["a", "b"])),
        ]);
        let out = render_attributes(&value);
        assert!(out.contains("attribute number has an unsupported data type number"));
        assert!(out.contains("attribute slice has an unsupported data type sequence"));
        assert!(out.contains(r#"name="username""#));
    }
}
