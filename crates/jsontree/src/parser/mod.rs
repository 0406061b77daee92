//! Recursive-descent JSON parser.
//!
//! Overview
//! - [`parse`] takes one complete document and returns either the root
//!   [`Value`] or a [`ParserError`]. Nothing is streamed and nothing is
//!   returned on failure.
//! - Each grammar rule is one method on `Parser`; the dispatch on the
//!   leading byte lives in `parse_value`. The [`Scanner`](scanner::Scanner)
//!   underneath only moves forward, so there is no backtracking.
//! - The first error wins. Every rule returns `Result` and errors leave the
//!   descent through `?`, which drops whatever containers were being built
//!   on the way out. There is no shared error flag.
//!
//! Errors carry a byte offset while the descent is running (`Failure`).
//! Line, column and the excerpt are computed once, at the top, when the
//! failure is turned into a [`ParserError`].

mod error;
mod numbers;
mod options;
pub(crate) mod scanner;
mod strings;

#[cfg(test)]
mod tests;

use alloc::{collections::TryReserveError, string::String};

pub use error::{ErrorSource, ParserError, SyntaxError};
pub use options::ParserOptions;
use scanner::Scanner;

use crate::{Array, Map, Value};

/// Parses a complete JSON document with default [`ParserOptions`].
///
/// The input is taken as UTF-8 bytes; it is not validated up front.
///
/// # Errors
///
/// Returns a [`ParserError`] describing the first problem found. No partial
/// tree is ever returned.
///
/// # Examples
///
/// ```
/// use jsontree::Value;
///
/// let v = jsontree::parse(r#"{"a":[1,2,{"b":"c"}]}"#)?;
/// assert_eq!(v.get("a").map(Value::len), Some(3));
///
/// let err = jsontree::parse("[1,2,").unwrap_err();
/// assert_eq!(err.to_string(), r#"syntax error: unterminated array at 1:6 near "[1,2,""#);
/// # Ok::<(), jsontree::ParserError>(())
/// ```
pub fn parse(input: impl AsRef<[u8]>) -> Result<Value, ParserError> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete JSON document.
///
/// # Errors
///
/// Returns a [`ParserError`] describing the first problem found.
pub fn parse_with_options(
    input: impl AsRef<[u8]>,
    options: ParserOptions,
) -> Result<Value, ParserError> {
    let input = input.as_ref();
    let mut parser = Parser::new(input, options);
    match parser.parse_document() {
        Ok(root) => {
            log::debug!("parsed {} byte document", input.len());
            Ok(root)
        }
        Err(failure) => {
            let err = parser.into_error(failure);
            log::debug!("failed to parse {} byte document: {err}", input.len());
            Err(err)
        }
    }
}

/// A failure inside the descent, before diagnostics are attached.
#[derive(Debug)]
pub(crate) struct Failure {
    pub(crate) source: ErrorSource,
    pub(crate) offset: usize,
}

impl Failure {
    pub(crate) fn syntax(error: SyntaxError, offset: usize) -> Self {
        Self {
            source: error.into(),
            offset,
        }
    }

    pub(crate) fn out_of_memory(error: TryReserveError, offset: usize) -> Self {
        Self {
            source: error.into(),
            offset,
        }
    }
}

type ParseResult<T> = Result<T, Failure>;

struct Parser<'src> {
    scanner: Scanner<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(input: &'src [u8], options: ParserOptions) -> Self {
        Self {
            scanner: Scanner::new(input),
            options,
            depth: 0,
        }
    }

    fn into_error(self, failure: Failure) -> ParserError {
        let (line, column) = self.scanner.line_col(failure.offset);
        ParserError {
            source: failure.source,
            offset: failure.offset,
            line,
            column,
            excerpt: self.scanner.excerpt(failure.offset, self.options.excerpt_len),
        }
    }

    /// A syntax error at the current position.
    fn fail(&self, error: SyntaxError) -> Failure {
        Failure::syntax(error, self.scanner.position())
    }

    fn out_of_memory(&self, error: TryReserveError) -> Failure {
        Failure::out_of_memory(error, self.scanner.position())
    }

    fn parse_document(&mut self) -> ParseResult<Value> {
        let root = self.parse_value()?;
        self.scanner.skip_whitespace();
        if !self.scanner.is_at_end() {
            return Err(self.fail(SyntaxError::TrailingCharacters));
        }
        Ok(root)
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        self.scanner.skip_whitespace();
        match self.scanner.peek() {
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b't') => self.parse_literal(b"true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Boolean(false)),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b'-' | b'0'..=b'9') => {
                let lexeme = numbers::lex(&mut self.scanner);
                Ok(Value::Number(numbers::to_f64(lexeme)))
            }
            Some(_) => {
                let ch = self
                    .scanner
                    .peek_char()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(self.fail(SyntaxError::UnexpectedCharacter(ch)))
            }
            None => Err(self.fail(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    fn parse_string(&mut self) -> ParseResult<String> {
        strings::parse(&mut self.scanner)
    }

    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> ParseResult<Value> {
        if self.scanner.eat_literal(literal) {
            Ok(value)
        } else {
            Err(self.fail(SyntaxError::UnexpectedLiteral))
        }
    }

    /// Enters a container whose opening bracket is the next byte.
    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        match self.options.max_depth {
            Some(limit) if self.depth > limit => {
                return Err(self.fail(SyntaxError::DepthLimitExceeded(limit)));
            }
            _ => {}
        }
        self.scanner.advance();
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_array(&mut self) -> ParseResult<Value> {
        self.enter()?;
        log::trace!(
            "array at offset {} (depth {})",
            self.scanner.position() - 1,
            self.depth
        );

        let mut items = Array::new();
        self.scanner.skip_whitespace();
        if self.scanner.peek() == Some(b']') {
            self.scanner.advance();
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            self.scanner.skip_whitespace();
            if self.scanner.is_at_end() {
                return Err(self.fail(SyntaxError::UnterminatedArray));
            }
            let item = self.parse_value()?;
            items.try_reserve(1).map_err(|e| self.out_of_memory(e))?;
            items.push(item);

            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(b',') => {
                    self.scanner.advance();
                }
                Some(b']') => {
                    self.scanner.advance();
                    break;
                }
                Some(_) => return Err(self.fail(SyntaxError::ExpectedToken("',' or ']'"))),
                None => return Err(self.fail(SyntaxError::UnterminatedArray)),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> ParseResult<Value> {
        self.enter()?;
        log::trace!(
            "object at offset {} (depth {})",
            self.scanner.position() - 1,
            self.depth
        );

        let mut map = Map::new();
        self.scanner.skip_whitespace();
        if self.scanner.peek() == Some(b'}') {
            self.scanner.advance();
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(b'"') => {}
                Some(_) => return Err(self.fail(SyntaxError::ExpectedToken("string key"))),
                None => return Err(self.fail(SyntaxError::UnterminatedObject)),
            }
            let key = self.parse_string()?;

            self.scanner.skip_whitespace();
            if self.scanner.is_at_end() {
                return Err(self.fail(SyntaxError::UnterminatedObject));
            }
            self.scanner
                .expect(b':', "':'")
                .map_err(|e| self.fail(e))?;

            self.scanner.skip_whitespace();
            if self.scanner.is_at_end() {
                return Err(self.fail(SyntaxError::UnterminatedObject));
            }
            let value = self.parse_value()?;
            map.try_reserve(1).map_err(|e| self.out_of_memory(e))?;
            map.push(key, value);

            self.scanner.skip_whitespace();
            match self.scanner.peek() {
                Some(b',') => {
                    self.scanner.advance();
                }
                Some(b'}') => {
                    self.scanner.advance();
                    break;
                }
                Some(_) => return Err(self.fail(SyntaxError::ExpectedToken("',' or '}'"))),
                None => return Err(self.fail(SyntaxError::UnterminatedObject)),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }
}
