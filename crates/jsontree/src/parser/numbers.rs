//! Number lexing and conversion.
//!
//! Lexing mirrors the shape of the JSON number grammar without validating
//! it: `-`, a digit run, an optional `.` and digit run, an optional
//! exponent. Degenerate forms are accepted and converted the way C's
//! `strtod` would treat them, by the longest prefix that forms a number:
//!
//! | lexeme | value |
//! |--------|-------|
//! | `-`    | `0.0` |
//! | `-.`   | `0.0` |
//! | `1.`   | `1.0` |
//! | `1e`   | `1.0` |
//! | `2E+`  | `2.0` |
//! | `1e999`| `inf` |

use super::scanner::Scanner;

/// Consumes one number lexeme and returns its text.
pub(crate) fn lex<'src>(scanner: &mut Scanner<'src>) -> &'src [u8] {
    let rest = scanner.rest();
    let mut len = 0;

    if rest.first() == Some(&b'-') {
        len += 1;
    }
    len += digit_run(&rest[len..]);
    if rest.get(len) == Some(&b'.') {
        len += 1;
        len += digit_run(&rest[len..]);
    }
    if matches!(rest.get(len), Some(b'e' | b'E')) {
        len += 1;
        if matches!(rest.get(len), Some(b'+' | b'-')) {
            len += 1;
        }
        len += digit_run(&rest[len..]);
    }

    scanner.skip(len);
    &rest[..len]
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Converts a lexeme produced by [`lex`] to `f64`.
pub(crate) fn to_f64(lexeme: &[u8]) -> f64 {
    let exp_at = lexeme.iter().position(|b| matches!(b, b'e' | b'E'));
    let (mantissa, exponent) = match exp_at {
        Some(i) => lexeme.split_at(i),
        None => (lexeme, &[][..]),
    };

    if !mantissa.iter().any(u8::is_ascii_digit) {
        return 0.0;
    }
    let text = if exponent.iter().any(u8::is_ascii_digit) {
        lexeme
    } else {
        mantissa
    };

    // The lexer only admits ASCII, and every remaining shape (`1.`, `-.5`,
    // `1.5e-3`) is accepted by the standard float parser.
    core::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}
