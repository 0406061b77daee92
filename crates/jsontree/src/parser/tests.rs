use alloc::{format, string::String, string::ToString};

use test_log::test;

use super::*;

fn err(input: &str) -> ParserError {
    parse(input).expect_err("input should be rejected")
}

#[test]
fn first_error_wins() {
    // The inner string is unterminated; the enclosing array and object never
    // get to report their own failures.
    let e = err(r#"{"a":["b"#);
    assert_eq!(e.syntax(), Some(&SyntaxError::UnterminatedString));
    assert_eq!(e.offset, 8);
}

#[test]
fn error_position_points_at_offending_byte() {
    let e = err("{\"a\" 1}");
    assert_eq!(e.syntax(), Some(&SyntaxError::ExpectedToken("':'")));
    assert_eq!((e.offset, e.line, e.column), (5, 1, 6));
    assert_eq!(e.excerpt, "1}");
}

#[test]
fn line_and_column_track_newlines() {
    let e = err("{\n  \"a\": 1,\n  \"b\": ?\n}");
    assert_eq!(e.syntax(), Some(&SyntaxError::UnexpectedCharacter('?')));
    assert_eq!((e.line, e.column), (3, 8));
    assert_eq!(e.excerpt, "?\n}");
}

#[test]
fn excerpt_is_bounded() {
    let input = format!("[{}", "1,".repeat(100));
    let input = input + "x";
    let e = err(&input);
    assert_eq!(e.syntax(), Some(&SyntaxError::UnexpectedCharacter('x')));
    assert_eq!(e.excerpt, "x");

    let tail = err(&"[1,".repeat(40));
    assert_eq!(tail.syntax(), Some(&SyntaxError::UnterminatedArray));
    assert_eq!(tail.excerpt.chars().count(), ParserOptions::DEFAULT_EXCERPT_LEN);
    assert!(tail.excerpt.ends_with("[1,"));
}

#[test]
fn excerpt_length_is_configurable() {
    let options = ParserOptions {
        excerpt_len: 4,
        ..ParserOptions::default()
    };
    let e = parse_with_options("[1, @@@@@@@@]", options).unwrap_err();
    assert_eq!(e.excerpt, "@@@@");
    assert_eq!(e.offset, 4);
}

#[test]
fn depth_limit_rejects_deep_nesting() {
    let options = ParserOptions {
        max_depth: Some(3),
        ..ParserOptions::default()
    };
    assert!(parse_with_options("[[[1]]]", options).is_ok());
    assert!(parse_with_options(r#"{"a":{"b":[]}}"#, options).is_ok());

    let e = parse_with_options("[[[[1]]]]", options).unwrap_err();
    assert_eq!(e.syntax(), Some(&SyntaxError::DepthLimitExceeded(3)));
    assert_eq!(e.offset, 3);
}

#[test]
fn default_depth_limit_prevents_stack_exhaustion() {
    let deep = "[".repeat(100_000);
    let e = err(&deep);
    assert_eq!(
        e.syntax(),
        Some(&SyntaxError::DepthLimitExceeded(ParserOptions::DEFAULT_MAX_DEPTH))
    );

    let ok = format!("{}{}", "[".repeat(128), "]".repeat(128));
    assert!(parse(ok).is_ok());
}

#[test]
fn depth_limit_can_be_lifted() {
    let options = ParserOptions {
        max_depth: None,
        ..ParserOptions::default()
    };
    let nested = format!("{}{}", "[".repeat(500), "]".repeat(500));
    let mut v = parse_with_options(&nested, options).unwrap();
    let mut depth = 0;
    while let Value::Array(mut items) = v {
        depth += 1;
        v = items.pop().unwrap_or(Value::Null);
    }
    assert_eq!(depth, 500);
}

#[test]
fn siblings_do_not_accumulate_depth() {
    let options = ParserOptions {
        max_depth: Some(2),
        ..ParserOptions::default()
    };
    let wide = format!("[{}[]]", "[],".repeat(50));
    assert!(parse_with_options(wide, options).is_ok());
}

#[test]
fn accepts_bytes_and_strings() {
    let from_str = parse("[true]").unwrap();
    let from_bytes = parse(b"[true]").unwrap();
    let from_string = parse(String::from("[true]")).unwrap();
    assert_eq!(from_str, from_bytes);
    assert_eq!(from_str, from_string);
}

#[test]
fn from_str_uses_default_options() {
    let v: Value = "  {\"k\" : null}  ".parse().unwrap();
    assert_eq!(v.get("k"), Some(&Value::Null));
    assert!("nope".parse::<Value>().is_err());
}

#[test]
fn display_includes_kind_position_and_excerpt() {
    assert_eq!(
        err("true]").to_string(),
        r#"syntax error: trailing characters at 1:5 near "]""#
    );
    assert_eq!(
        err("[1 2]").to_string(),
        r#"syntax error: expected ',' or ']' at 1:4 near "2]""#
    );
    assert_eq!(
        err("").to_string(),
        r#"syntax error: unexpected end of input at 1:1 near """#
    );
}
