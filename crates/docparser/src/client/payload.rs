//! Normalized response bodies.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::error::Result;

/// Returns `true` if `text` is a well-formed JSON document.
///
/// The empty string is not JSON.
pub fn is_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Response body of a successful API call.
///
/// The API answers with JSON for almost everything, but a handful of
/// responses are plain text; those are surfaced unchanged as [`Payload::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The body was well-formed JSON.
    Json(Value),
    /// The body was not JSON and is returned verbatim.
    Raw(String),
}

impl Payload {
    /// Normalizes a response body.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<Value>(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Raw(body),
        }
    }

    /// Returns `true` if the body was decoded as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns the decoded JSON value, if any.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw body, if it was not JSON.
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Raw(text) => Some(text),
        }
    }

    /// Converts the payload into a JSON value; raw bodies become JSON strings.
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Raw(text) => Value::String(text),
        }
    }

    /// Decodes the payload into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the payload does not match `T`.
    ///
    /// [`Error::Serialization`]: crate::Error::Serialization
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.into_json())?)
    }

    /// Loose truthiness of the payload.
    ///
    /// `null`, `false`, zero, the empty string, `"0"`, and empty arrays or
    /// objects are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Json(value) => value_is_truthy(value),
            Self::Raw(text) => string_is_truthy(text),
        }
    }
}

fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => string_is_truthy(s),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn string_is_truthy(text: &str) -> bool {
    !text.is_empty() && text != "0"
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_is_json() {
        assert!(is_json(r#"{"a":1}"#));
        assert!(is_json("[1, 2, 3]"));
        assert!(is_json("true"));
        assert!(!is_json("not json"));
        assert!(!is_json(""));
        assert!(!is_json("{\"a\":"));
    }

    #[test]
    fn test_from_body() {
        assert_eq!(
            Payload::from_body(r#"{"msg":"pong"}"#.to_string()),
            Payload::Json(json!({"msg": "pong"}))
        );
        assert_eq!(
            Payload::from_body("plain text".to_string()),
            Payload::Raw("plain text".to_string())
        );
        assert_eq!(Payload::from_body(String::new()), Payload::Raw(String::new()));
    }

    #[test]
    fn test_truthiness() {
        assert!(Payload::Json(json!({"msg": "pong"})).is_truthy());
        assert!(Payload::Json(json!(true)).is_truthy());
        assert!(Payload::Json(json!([1])).is_truthy());
        assert!(Payload::Raw("pong".to_string()).is_truthy());

        assert!(!Payload::Json(json!(null)).is_truthy());
        assert!(!Payload::Json(json!(false)).is_truthy());
        assert!(!Payload::Json(json!(0)).is_truthy());
        assert!(!Payload::Json(json!({})).is_truthy());
        assert!(!Payload::Json(json!([])).is_truthy());
        assert!(!Payload::Json(json!("0")).is_truthy());
        assert!(!Payload::Raw(String::new()).is_truthy());
    }

    #[test]
    fn test_accessors() {
        let raw = Payload::Raw("hello".to_string());
        assert_eq!(raw.as_raw(), Some("hello"));
        assert!(raw.as_json().is_none());
        assert_eq!(raw.into_json(), json!("hello"));

        let decoded = Payload::Json(json!({"id": 1}));
        assert!(decoded.is_json());
        assert_eq!(decoded.as_json(), Some(&json!({"id": 1})));
    }
}
