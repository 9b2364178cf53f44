use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One launchable app in the manifest.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

/// Optional `info.json` next to an app's entry file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Descriptor {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Descriptor {
    /// Parses `info.json` contents. Only a JSON object is accepted; a leading
    /// UTF-8 byte order mark is skipped.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        match serde_json::from_slice::<Value>(bytes)? {
            Value::Object(map) => serde_json::from_value(Value::Object(map)),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn thumbnail(&self) -> Option<&str> {
        non_empty(&self.thumbnail)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Empty strings count as unset.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_ignores_unknown_keys_and_empty_values() {
        let descriptor = Descriptor::from_slice(
            br#"{"title": "", "description": "Hi", "author": "someone"}"#,
        )
        .unwrap();
        assert_eq!(descriptor.title(), None);
        assert_eq!(descriptor.description(), Some("Hi"));
        assert_eq!(descriptor.thumbnail(), None);
    }

    #[test]
    fn descriptor_rejects_non_string_fields() {
        assert!(Descriptor::from_slice(br#"{"title": 5}"#).is_err());
    }

    #[test]
    fn descriptor_must_be_an_object() {
        let err = Descriptor::from_slice(br#"["Arr Title","Arr desc","arr.png"]"#).unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, found an array");

        assert!(Descriptor::from_slice(b"[]").is_err());
        assert!(Descriptor::from_slice(b"null").is_err());
        assert!(Descriptor::from_slice(br#""Title""#).is_err());
    }

    #[test]
    fn descriptor_skips_leading_byte_order_mark() {
        let descriptor = Descriptor::from_slice(b"\xEF\xBB\xBF{\"title\":\"Bom Title\"}").unwrap();
        assert_eq!(descriptor.title(), Some("Bom Title"));
    }

    #[test]
    fn app_entry_serializes_in_field_order() {
        let entry = AppEntry {
            id: "demo".to_string(),
            url: "../apps/demo/".to_string(),
            title: "Demo".to_string(),
            description: "A demo".to_string(),
            thumbnail: "../apps/demo/t.png".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"id":"demo","url":"../apps/demo/","title":"Demo","description":"A demo","thumbnail":"../apps/demo/t.png"}"#
        );
    }
}
