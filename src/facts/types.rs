//! Wire types for the fact service.
//!
//! The service returns more than we need:
//!
//! ```json
//! {
//!   "id": "7f1b...",
//!   "text": "Cats sleep 70% of their lives.",
//!   "source": "djtech.net",
//!   "language": "en",
//!   "permalink": "https://..."
//! }
//! ```
//!
//! Only `text` is read. Unknown fields are ignored by serde's default.
//! The body must be a JSON object: derived struct impls also accept a
//! sequence (`["hi"]` would map positionally onto `text`), so bodies go
//! through `Fact::from_json`, which rejects anything but a map.

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Fact {
    /// Missing or `null` both decode to `None`.
    #[serde(default)]
    pub text: Option<String>,
}

impl Fact {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Decodes a response body. Only a JSON object is a fact.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(object))
    }

    /// The fact text, or empty when the service sent none.
    pub fn into_text(self) -> String {
        self.text.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": "abc",
            "text": "Honey never spoils.",
            "source": "example.com",
            "language": "en"
        }"#;
        let fact = Fact::from_json(json.as_bytes()).unwrap();
        assert_eq!(fact.text.as_deref(), Some("Honey never spoils."));
    }

    #[test]
    fn test_missing_text_is_empty() {
        let fact = Fact::from_json(br#"{"id": "abc"}"#).unwrap();
        assert_eq!(fact.text, None);
        assert_eq!(fact.into_text(), "");
    }

    #[test]
    fn test_null_text_is_empty() {
        let fact = Fact::from_json(br#"{"text": null}"#).unwrap();
        assert_eq!(fact.into_text(), "");
    }

    #[test]
    fn test_non_string_text_is_rejected() {
        assert!(Fact::from_json(br#"{"text": 42}"#).is_err());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(Fact::from_json(b"<html>oops</html>").is_err());
    }

    #[test]
    fn test_array_body_is_rejected() {
        assert!(Fact::from_json(br#"["hi"]"#).is_err());
        assert!(Fact::from_json(b"[]").is_err());
    }

    #[test]
    fn test_scalar_body_is_rejected() {
        assert!(Fact::from_json(br#""just a string""#).is_err());
        assert!(Fact::from_json(b"42").is_err());
    }
}
