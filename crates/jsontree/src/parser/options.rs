/// Configuration for [`parse_with_options`](crate::parse_with_options).
///
/// # Examples
///
/// ```rust
/// use jsontree::ParserOptions;
///
/// let options = ParserOptions {
///     excerpt_len: 64,
///     ..Default::default()
/// };
/// let err = jsontree::parse_with_options("[1, 2", options).unwrap_err();
/// assert_eq!(err.excerpt, "[1, 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of characters of input quoted in a
    /// [`ParserError`](crate::ParserError) excerpt.
    ///
    /// # Default
    ///
    /// `32`
    pub excerpt_len: usize,

    /// Maximum nesting depth of arrays and objects.
    ///
    /// Parsing recurses once per container level, so unbounded nesting lets
    /// a hostile document exhaust the stack. `None` removes the limit.
    ///
    /// # Default
    ///
    /// `Some(128)`
    pub max_depth: Option<usize>,
}

impl ParserOptions {
    /// Default length of error excerpts.
    pub const DEFAULT_EXCERPT_LEN: usize = 32;

    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 128;
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            excerpt_len: Self::DEFAULT_EXCERPT_LEN,
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
        }
    }
}
