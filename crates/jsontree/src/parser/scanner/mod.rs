//! Scanner: a byte cursor over one complete input buffer.
//!
//! The scanner borrows the input for the duration of a parse and only ever
//! moves forward. It knows nothing about JSON values; the parser decides
//! what each byte means. End of input is reported as `None` from
//! [`Scanner::peek`] and [`Scanner::advance`] and never as an error.
//!
//! Input is treated as bytes. Multi-byte UTF-8 sequences are only decoded
//! when building diagnostics (error characters and excerpts).

use alloc::string::String;

use bstr::ByteSlice;

use super::SyntaxError;

#[derive(Debug, Clone)]
pub(crate) struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(input: &'src [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unread byte.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Unread input.
    #[inline]
    pub(crate) fn rest(&self) -> &'src [u8] {
        &self.input[self.pos..]
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Returns the next byte without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Consumes and returns the next byte. At end of input this is a no-op.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consumes `n` bytes, clamped to the end of input.
    #[inline]
    pub(crate) fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Consumes space, tab, line feed and carriage return.
    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    /// Consumes `expected`, or fails without consuming anything.
    ///
    /// `what` names the token in the error, e.g. `"':'"`.
    pub(crate) fn expect(&mut self, expected: u8, what: &'static str) -> Result<(), SyntaxError> {
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(SyntaxError::ExpectedToken(what))
        }
    }

    /// Consumes `literal` if the unread input starts with it.
    pub(crate) fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes bytes while `pred` holds and returns them.
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'src [u8] {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Consumes bytes up to (not including) the first byte matching `stop`.
    pub(crate) fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> &'src [u8] {
        self.take_while(|b| !stop(b))
    }

    /// Decodes the character starting at the current position, if any.
    pub(crate) fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Up to `len` characters of input for an error reported at `offset`.
    ///
    /// The window starts at `offset`. When nothing follows `offset` the
    /// window ends there instead, so failures at end of input still quote
    /// the tail that led to them.
    pub(crate) fn excerpt(&self, offset: usize, len: usize) -> String {
        let offset = offset.min(self.input.len());
        let after = &self.input[offset..];
        if !after.is_empty() {
            return after.chars().take(len).collect();
        }
        let before = &self.input[..offset];
        let skip = before.chars().count().saturating_sub(len);
        before.chars().skip(skip).collect()
    }

    /// 1-based line and byte column of `offset`.
    pub(crate) fn line_col(&self, offset: usize) -> (usize, usize) {
        let before = &self.input[..offset.min(self.input.len())];
        let line = before.find_iter(b"\n").count() + 1;
        let line_start = before.rfind_byte(b'\n').map_or(0, |i| i + 1);
        (line, before.len() - line_start + 1)
    }
}
