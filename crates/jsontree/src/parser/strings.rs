//! String literal decoding.
//!
//! Escapes are resolved as the literal is scanned, with one exception:
//! `\u` is copied through as the six bytes `\`, `u` and the four that
//! follow. Callers that need code points decode those sequences
//! themselves; surrogate pairing never happens here.

use alloc::{string::String, vec::Vec};

use bstr::ByteVec;

use super::{Failure, SyntaxError, scanner::Scanner};

/// Parses a string literal starting at the opening quote.
pub(crate) fn parse(scanner: &mut Scanner<'_>) -> Result<String, Failure> {
    scanner
        .expect(b'"', "'\"'")
        .map_err(|e| Failure::syntax(e, scanner.position()))?;

    let mut buf = Vec::new();
    loop {
        let run = scanner.take_until(|b| b == b'"' || b == b'\\');
        push(&mut buf, run, scanner)?;

        match scanner.advance() {
            Some(b'"') => break,
            Some(_) => unescape(&mut buf, scanner)?,
            None => {
                return Err(Failure::syntax(
                    SyntaxError::UnterminatedString,
                    scanner.position(),
                ));
            }
        }
    }

    // Input is not validated up front; anything that is not UTF-8 ends up
    // as U+FFFD here.
    Ok(buf.into_string_lossy())
}

/// Handles the escape following a consumed backslash.
fn unescape(buf: &mut Vec<u8>, scanner: &mut Scanner<'_>) -> Result<(), Failure> {
    let at = scanner.position();
    let Some(escaped) = scanner.peek_char() else {
        return Err(Failure::syntax(SyntaxError::UnterminatedString, at));
    };

    let decoded = match escaped {
        '"' => b'"',
        '\\' => b'\\',
        '/' => b'/',
        'b' => 0x08,
        'f' => 0x0C,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'u' => {
            scanner.advance();
            let digits = scanner.rest();
            if digits.len() < 4 {
                scanner.skip(digits.len());
                return Err(Failure::syntax(
                    SyntaxError::UnterminatedString,
                    scanner.position(),
                ));
            }
            push(buf, b"\\u", scanner)?;
            push(buf, &digits[..4], scanner)?;
            scanner.skip(4);
            return Ok(());
        }
        other => {
            // Point at the backslash so the excerpt shows the whole escape.
            return Err(Failure::syntax(SyntaxError::InvalidEscape(other), at - 1));
        }
    };

    scanner.advance();
    push(buf, &[decoded], scanner)
}

fn push(buf: &mut Vec<u8>, bytes: &[u8], scanner: &Scanner<'_>) -> Result<(), Failure> {
    buf.try_reserve(bytes.len())
        .map_err(|e| Failure::out_of_memory(e, scanner.position()))?;
    buf.extend_from_slice(bytes);
    Ok(())
}
