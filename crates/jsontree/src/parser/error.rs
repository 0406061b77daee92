use alloc::{collections::TryReserveError, string::String};

use thiserror::Error;

/// A failed parse: what went wrong and where.
///
/// `offset` is a byte offset into the input; `line` and `column` are
/// 1-based, with the column counted in bytes. `excerpt` holds a short run of
/// input starting at the failure position, or the last characters of the
/// input when the failure is at its end.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{source} at {line}:{column} near {excerpt:?}")]
pub struct ParserError {
    pub(crate) source: ErrorSource,
    /// Byte offset of the failure.
    pub offset: usize,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure.
    pub column: usize,
    /// Input text around the failure, for diagnostics.
    pub excerpt: String,
}

impl ParserError {
    /// The underlying cause.
    #[must_use]
    pub fn kind(&self) -> &ErrorSource {
        &self.source
    }

    /// The syntax error, when the failure was syntactic.
    #[must_use]
    pub fn syntax(&self) -> Option<&SyntaxError> {
        match &self.source {
            ErrorSource::SyntaxError(e) => Some(e),
            ErrorSource::OutOfMemory(_) => None,
        }
    }
}

/// Why a parse failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorSource {
    /// The input is not a document this parser accepts.
    #[error("syntax error: {0}")]
    SyntaxError(#[from] SyntaxError),
    /// A growing buffer could not be allocated.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
}

/// The syntactic error taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// The byte at the current position cannot start a value.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// The input ended where a value was required.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A required token was not found.
    #[error("expected {0}")]
    ExpectedToken(&'static str),
    /// The input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,
    /// The input ended inside an array.
    #[error("unterminated array")]
    UnterminatedArray,
    /// The input ended inside an object.
    #[error("unterminated object")]
    UnterminatedObject,
    /// A backslash was followed by an unsupported character.
    #[error("invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    /// Text starting with `t`, `f` or `n` is not `true`, `false` or `null`.
    #[error("unexpected literal")]
    UnexpectedLiteral,
    /// Non-whitespace input follows the root value.
    #[error("trailing characters")]
    TrailingCharacters,
    /// Containers are nested deeper than the configured limit.
    #[error("nesting too deep (limit {0})")]
    DepthLimitExceeded(usize),
}
