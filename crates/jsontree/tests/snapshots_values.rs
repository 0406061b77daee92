#![expect(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use jsontree::{ParserOptions, parse, parse_with_options};

fn render_tree(input: &str) -> String {
    match parse(input) {
        Ok(v) => format!("{v:?}"),
        Err(e) => format!("error: {e}"),
    }
}

fn render_errors(inputs: &[&str]) -> String {
    let mut out = String::new();
    for input in inputs {
        let e = parse(input).expect_err("input should be rejected");
        writeln!(
            out,
            "{input:?} -> {} @ {}:{} excerpt {:?}",
            e.kind(),
            e.line,
            e.column,
            e.excerpt
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_trees() {
    insta::assert_snapshot!(render_tree("{}"), @"Object({})");
    insta::assert_snapshot!(render_tree("[]"), @"Array([])");
    insta::assert_snapshot!(render_tree(r#"{"a":[1,2,{"b":"c"}]}"#), @r#"Object({"a": Array([Number(1.0), Number(2.0), Object({"b": String("c")})])})"#);
    insta::assert_snapshot!(render_tree(r#"{"a":1,"a":2}"#), @r#"Object({"a": Number(1.0), "a": Number(2.0)})"#);
    insta::assert_snapshot!(render_tree("[true, false, null, -3.5e2, 1e999]"), @"Array([Boolean(true), Boolean(false), Null, Number(-350.0), Number(inf)])");
}

#[test]
fn snapshot_errors() {
    insta::assert_snapshot!(render_errors(&[
        "true]",
        "[1,2,",
        r#"{"a" 1}"#,
        "{\n  \"a\": tru\n}",
        r#""never closed"#,
    ]), @r#"
    "true]" -> syntax error: trailing characters @ 1:5 excerpt "]"
    "[1,2," -> syntax error: unterminated array @ 1:6 excerpt "[1,2,"
    "{\"a\" 1}" -> syntax error: expected ':' @ 1:6 excerpt "1}"
    "{\n  \"a\": tru\n}" -> syntax error: unexpected literal @ 2:8 excerpt "tru\n}"
    "\"never closed" -> syntax error: unterminated string @ 1:14 excerpt "\"never closed"
    "#);
}

#[test]
fn snapshot_pretty_output() {
    let v = parse(r#"{"a":[1,2,{"b":"c"}],"e":{},"s":"q\"t"}"#).unwrap();
    insta::assert_snapshot!(v.to_string(), @r#"{"a":[1,2,{"b":"c"}],"e":{},"s":"q\"t"}"#);
    insta::assert_snapshot!(format!("{v:#}"), @r#"
    {
      "a": [
        1,
        2,
        {
          "b": "c"
        }
      ],
      "e": {},
      "s": "q\"t"
    }
    "#);
}

#[test]
fn snapshot_short_excerpt() {
    let options = ParserOptions {
        excerpt_len: 8,
        ..ParserOptions::default()
    };
    let e = parse_with_options(r#"{"items": [1, 2, 3, oops, 5, 6, 7, 8]}"#, options).unwrap_err();
    insta::assert_snapshot!(e.to_string(), @r#"syntax error: unexpected character 'o' at 1:21 near "oops, 5,""#);
}
