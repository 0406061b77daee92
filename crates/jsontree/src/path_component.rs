use alloc::string::String;

/// One step of a path into a value tree.
///
/// A `Key` selects the first pair with that key in an object; an `Index`
/// selects an array element. Build paths with the [`path!`](crate::path)
/// macro and resolve them with [`Value::pointer`](crate::Value::pointer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    /// Object key.
    Key(String),
    /// Array index.
    Index(usize),
}

impl core::fmt::Display for PathComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathComponent::Key(k) => write!(f, ".{k}"),
            PathComponent::Index(i) => write!(f, "[{i}]"),
        }
    }
}

impl From<&str> for PathComponent {
    fn from(s: &str) -> Self {
        Self::Key(s.into())
    }
}

impl From<String> for PathComponent {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<usize> for PathComponent {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

#[doc(hidden)]
pub trait PathComponentFrom<T> {
    fn from_path_component(value: T) -> PathComponent;
}

// Integer literals in `path!` default to `i32`, so every integer width has to
// be accepted here.
macro_rules! impl_integer_as_path_component {
    ($($t:ty),+) => {
        $(
            impl PathComponentFrom<$t> for PathComponent {
                fn from_path_component(value: $t) -> Self {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    PathComponent::Index(value as usize)
                }
            }
        )+
    };
}
impl_integer_as_path_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl PathComponentFrom<&str> for PathComponent {
    fn from_path_component(value: &str) -> Self {
        PathComponent::Key(value.into())
    }
}

impl PathComponentFrom<String> for PathComponent {
    fn from_path_component(value: String) -> Self {
        PathComponent::Key(value)
    }
}

impl PathComponentFrom<&String> for PathComponent {
    fn from_path_component(value: &String) -> Self {
        PathComponent::Key(value.clone())
    }
}
