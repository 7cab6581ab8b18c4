//! Encoding of configuration values into JavaScript source.
//!
//! The inline scripts this crate emits carry their configuration as a
//! JavaScript object literal.  Most entries are plain JSON data, but some
//! (the `dataCallback` option in particular) are function literals that
//! must be spliced in verbatim, so a dedicated value type is used instead
//! of [`Value`] alone.

use std::collections::BTreeMap;
use std::fmt;

use sentry::protocol::Value;

/// A single value inside an emitted JavaScript object literal.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    /// Plain data, encoded as JSON.
    Value(Value),
    /// A raw JavaScript expression, emitted verbatim.
    Expr(String),
}

impl JsValue {
    /// Creates a raw JavaScript expression.
    pub fn expr(source: impl Into<String>) -> Self {
        JsValue::Expr(source.into())
    }
}

impl From<Value> for JsValue {
    fn from(value: Value) -> Self {
        JsValue::Value(value)
    }
}

impl From<&str> for JsValue {
    fn from(value: &str) -> Self {
        JsValue::Value(value.into())
    }
}

impl From<String> for JsValue {
    fn from(value: String) -> Self {
        JsValue::Value(value.into())
    }
}

impl From<bool> for JsValue {
    fn from(value: bool) -> Self {
        JsValue::Value(value.into())
    }
}

impl From<i64> for JsValue {
    fn from(value: i64) -> Self {
        JsValue::Value(value.into())
    }
}

impl From<u64> for JsValue {
    fn from(value: u64) -> Self {
        JsValue::Value(value.into())
    }
}

impl From<f64> for JsValue {
    fn from(value: f64) -> Self {
        JsValue::Value(value.into())
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Value(value) => f.write_str(&encode_json(value)),
            JsValue::Expr(source) => f.write_str(source),
        }
    }
}

/// An ordered string-keyed map that encodes as a JavaScript object literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject(BTreeMap<String, JsValue>);

impl JsObject {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<JsValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if the object has an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns `true` if the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for JsObject
where
    K: Into<String>,
    V: Into<JsValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsObject(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            if is_identifier(key) {
                write!(f, "{}:{}", key, value)?;
            } else {
                write!(f, "{}:{}", encode_json(&Value::from(key.as_str())), value)?;
            }
        }
        f.write_str("}")
    }
}

/// Encodes JSON data for splicing into an inline `<script>` element.
///
/// `</` is escaped inside the produced text so that a string value cannot
/// close the surrounding script element early.
pub(crate) fn encode_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
