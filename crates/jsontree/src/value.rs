//! JSON value types and utilities.
//!
//! This module defines the [`Value`] enum, the node type of every parsed
//! tree, together with its accessors and the JSON writer behind its
//! [`Display`](core::fmt::Display) implementation.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write};

use crate::{Map, PathComponent, Query};

/// Ordered sequence of values backing [`Value::Array`].
pub type Array = Vec<Value>;

/// One node of a parsed JSON tree.
///
/// Every container exclusively owns its children, so dropping the root
/// releases the whole tree. String payloads hold resolved escapes, except
/// `\uXXXX` sequences which are preserved as their six-character source
/// text.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::new();
/// map.push("key", Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// Any number, stored as a 64-bit float.
    Number(f64),
    /// A string with escapes resolved (`\u` excepted).
    String(String),
    /// An array, in document order.
    Array(Array),
    /// An object, in document order, duplicate keys retained.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl core::str::FromStr for Value {
    type Err = crate::ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the object pairs, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` in an object, returning the first matching pair's
    /// value. Non-objects and missing keys both yield `None`.
    ///
    /// ```
    /// let v = jsontree::parse(r#"{"a":1,"a":2}"#).unwrap();
    /// assert_eq!(v.get("a").and_then(|a| a.as_f64()), Some(1.0));
    /// assert!(v.get("b").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Returns the array element at `index`. Non-arrays and out-of-range
    /// indices both yield `None`.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Number of elements of an array or pairs of an object; `0` for
    /// anything else.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Array(a) => a.len(),
            Self::Object(m) => m.len(),
            _ => 0,
        }
    }

    /// Returns `true` when [`len`](Self::len) is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Follows `path` from this node, one key or index at a time.
    ///
    /// ```
    /// use jsontree::path;
    ///
    /// let v = jsontree::parse(r#"{"edges":[{"node":{"name":"Rust"}}]}"#).unwrap();
    /// let name = v.pointer(&path!["edges", 0, "node", "name"]);
    /// assert_eq!(name.and_then(|n| n.as_str()), Some("Rust"));
    /// ```
    #[must_use]
    pub fn pointer(&self, path: &[PathComponent]) -> Option<&Value> {
        path.iter().try_fold(self, |node, step| match step {
            PathComponent::Key(k) => node.get(k),
            PathComponent::Index(i) => node.get_index(*i),
        })
    }

    /// String payload, or `fallback` when this is not a string.
    #[must_use]
    pub fn str_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        Some(self).str_or(fallback)
    }

    /// Numeric payload, or `fallback` when this is not a number.
    #[must_use]
    pub fn number_or(&self, fallback: f64) -> f64 {
        Some(self).number_or(fallback)
    }

    /// Boolean payload, or `fallback` when this is not a boolean.
    #[must_use]
    pub fn bool_or(&self, fallback: bool) -> bool {
        Some(self).bool_or(fallback)
    }

    /// Releases the tree rooted at this value.
    ///
    /// Every string and container below `self` is freed exactly once. This is
    /// what dropping the value does anyway; calling it spells out the point
    /// at which a large response stops occupying memory.
    pub fn release(self) {
        drop(self);
    }
}

/// Escapes a string for inclusion in a JSON string literal.
///
/// Quotes and backslashes are escaped, the five control characters with a
/// short form use it, and the remaining C0 controls become `\u00XX`.
pub(crate) fn write_escaped_string<W: Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c < ' ' => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

fn write_number<W: Write>(n: f64, f: &mut W) -> fmt::Result {
    if n.is_finite() {
        write!(f, "{n}")
    } else {
        // JSON has no spelling for these; `1e999` is the usual source.
        f.write_str("null")
    }
}

fn write_indent<W: Write>(f: &mut W, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

/// Writes `value` as JSON. With `pretty`, containers are spread over
/// several lines with two-space indentation.
pub(crate) fn write_value<W: Write>(
    value: &Value,
    f: &mut W,
    pretty: bool,
    depth: usize,
) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, f),
        Value::String(s) => {
            f.write_char('"')?;
            write_escaped_string(s, f)?;
            f.write_char('"')
        }
        Value::Array(arr) if arr.is_empty() => f.write_str("[]"),
        Value::Array(arr) => {
            f.write_char('[')?;
            for (i, v) in arr.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                if pretty {
                    f.write_char('\n')?;
                    write_indent(f, depth + 1)?;
                }
                write_value(v, f, pretty, depth + 1)?;
            }
            if pretty {
                f.write_char('\n')?;
                write_indent(f, depth)?;
            }
            f.write_char(']')
        }
        Value::Object(map) if map.is_empty() => f.write_str("{}"),
        Value::Object(map) => {
            f.write_char('{')?;
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_char(',')?;
                }
                if pretty {
                    f.write_char('\n')?;
                    write_indent(f, depth + 1)?;
                }
                f.write_char('"')?;
                write_escaped_string(k, f)?;
                f.write_str(if pretty { "\": " } else { "\":" })?;
                write_value(v, f, pretty, depth + 1)?;
            }
            if pretty {
                f.write_char('\n')?;
                write_indent(f, depth)?;
            }
            f.write_char('}')
        }
    }
}

impl fmt::Display for Value {
    /// Writes compact JSON; `{:#}` pretty-prints instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(self, f, f.alternate(), 0)
    }
}

#[cfg(any(test, feature = "serde"))]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for v in arr {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::path;

    fn sample() -> Value {
        let mut inner = Map::new();
        inner.push("b", Value::from("c"));
        let mut root = Map::new();
        root.push(
            "a",
            Value::Array(alloc::vec![
                Value::Number(1.0),
                Value::Number(2.0),
                Value::Object(inner),
            ]),
        );
        Value::Object(root)
    }

    #[test]
    fn compact_display() {
        assert_eq!(sample().to_string(), r#"{"a":[1,2,{"b":"c"}]}"#);
    }

    #[test]
    fn writes_into_any_fmt_sink() {
        let mut out = String::new();
        write_value(&sample(), &mut out, false, 0).unwrap();
        assert_eq!(out, r#"{"a":[1,2,{"b":"c"}]}"#);

        let mut escaped = String::new();
        write_escaped_string("a\"b", &mut escaped).unwrap();
        assert_eq!(escaped, r#"a\"b"#);
    }

    #[test]
    fn pretty_display() {
        let rendered = alloc::format!("{:#}", sample());
        assert_eq!(
            rendered,
            "{\n  \"a\": [\n    1,\n    2,\n    {\n      \"b\": \"c\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn escapes_control_characters() {
        let v = Value::from("tab\there \"q\" \\ \u{1}");
        assert_eq!(v.to_string(), r#""tab\there \"q\" \\ \u0001""#);
    }

    #[test]
    fn non_finite_numbers_render_as_null() {
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "null");
        assert_eq!(Value::Number(-350.0).to_string(), "-350");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
    }

    #[test]
    fn accessors_respect_tags() {
        let v = sample();
        assert!(v.is_object());
        assert_eq!(v.len(), 1);
        assert!(v.get_index(0).is_none());
        assert_eq!(v.pointer(&path!["a", 1]).and_then(Value::as_f64), Some(2.0));
        assert_eq!(v.pointer(&path!["a", 2, "b"]).map(|b| b.str_or("")), Some("c"));
        assert!(v.pointer(&path!["a", 7]).is_none());
        assert_eq!(Value::Null.number_or(3.0), 3.0);
        assert!(Value::Boolean(true).bool_or(false));
        assert!(Value::Null.is_empty());
    }

    #[test]
    fn serializes_through_serde() {
        // serde_json always spells f64 with a fraction.
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"a":[1.0,2.0,{"b":"c"}]}"#);
    }
}
