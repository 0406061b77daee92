//! Fallback-based navigation over possibly missing nodes.
//!
//! API payloads routinely omit fields or send `null` where an object is
//! expected. [`Query`] lets callers chain lookups through `Option<&Value>`
//! and pull scalars out with a default, so a missing or mistyped field
//! degrades to the fallback instead of failing the caller.

use crate::Value;

/// Navigation and scalar extraction on `Option<&Value>`.
///
/// ```
/// use jsontree::Query;
///
/// let repo = jsontree::parse(r#"{"name":"jsontree","primaryLanguage":null,"stargazerCount":7}"#)?;
/// let repo = Some(&repo);
///
/// assert_eq!(repo.get("name").str_or(""), "jsontree");
/// assert_eq!(repo.get("primaryLanguage").get("name").str_or("Unknown"), "Unknown");
/// assert_eq!(repo.get("stargazerCount").number_or(0.0), 7.0);
/// assert!(!repo.get("isFork").bool_or(false));
/// # Ok::<(), jsontree::ParserError>(())
/// ```
pub trait Query<'a>: Sized {
    /// Object lookup, first matching key wins.
    #[must_use]
    fn get(self, key: &str) -> Option<&'a Value>;

    /// Array element lookup.
    #[must_use]
    fn get_index(self, index: usize) -> Option<&'a Value>;

    /// String payload or `fallback`.
    #[must_use]
    fn str_or(self, fallback: &'a str) -> &'a str;

    /// Numeric payload or `fallback`.
    #[must_use]
    fn number_or(self, fallback: f64) -> f64;

    /// Boolean payload or `fallback`.
    #[must_use]
    fn bool_or(self, fallback: bool) -> bool;

    /// Element count of an array; `0` when absent or not an array.
    #[must_use]
    fn array_len(self) -> usize;
}

impl<'a> Query<'a> for Option<&'a Value> {
    fn get(self, key: &str) -> Option<&'a Value> {
        self?.get(key)
    }

    fn get_index(self, index: usize) -> Option<&'a Value> {
        self?.get_index(index)
    }

    fn str_or(self, fallback: &'a str) -> &'a str {
        self.and_then(Value::as_str).unwrap_or(fallback)
    }

    fn number_or(self, fallback: f64) -> f64 {
        self.and_then(Value::as_f64).unwrap_or(fallback)
    }

    fn bool_or(self, fallback: bool) -> bool {
        self.and_then(Value::as_bool).unwrap_or(fallback)
    }

    fn array_len(self) -> usize {
        self.and_then(Value::as_array).map_or(0, <[Value]>::len)
    }
}
