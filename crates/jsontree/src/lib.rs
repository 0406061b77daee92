//! A small, self-contained JSON decoder that builds an owned tree of
//! dynamically typed values.
//!
//! The decoder is a hand-written recursive-descent parser over a complete
//! input buffer. It is tuned for the kind of payloads a typical API client
//! receives (GraphQL or REST responses) rather than for strict RFC 8259
//! conformance:
//!
//! - `\uXXXX` escapes are kept verbatim in string payloads instead of being
//!   decoded to code points.
//! - Number lexing is greedy and lenient (`-` alone parses as `0`, `1e` as
//!   `1`).
//! - Objects keep every pair in insertion order, duplicates included, and
//!   lookups return the first match.
//!
//! ```
//! use jsontree::Query;
//!
//! let root = jsontree::parse(r#"{"data":{"user":{"login":"octocat","followers":{"totalCount":42}}}}"#)?;
//! let user = root.get("data").get("user");
//!
//! assert_eq!(user.get("login").str_or(""), "octocat");
//! assert_eq!(user.get("followers").get("totalCount").number_or(0.0), 42.0);
//! assert_eq!(user.get("bio").str_or("n/a"), "n/a");
//! # Ok::<(), jsontree::ParserError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod map;
mod parser;
mod path_component;
mod query;
mod value;


pub use map::Map;
pub use parser::{
    ErrorSource, ParserError, ParserOptions, SyntaxError, parse, parse_with_options,
};
pub use path_component::{PathComponent, PathComponentFrom};
pub use query::Query;
pub use value::{Array, Value};

#[doc(hidden)]
pub use alloc::vec;

/// Macro to build a `Vec<PathComponent>` from a heterogeneous list of keys and
/// indices, for use with [`Value::pointer`].
///
/// ```rust
/// use jsontree::{path, PathComponent};
///
/// let p = path!["edges", 0, "node"];
/// assert_eq!(
///     p,
///     vec![
///         PathComponent::Key("edges".into()),
///         PathComponent::Index(0),
///         PathComponent::Key("node".into()),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::PathComponentFrom;
        $crate::vec![$($crate::PathComponent::from_path_component($elem)),*]
    }};
}
