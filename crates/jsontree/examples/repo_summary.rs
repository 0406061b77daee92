//! Summarizes a GitHub GraphQL repositories response.
//!
//! Reads the document named on the command line (or a built-in sample when
//! no path is given), then prints the total star count and the number of
//! bytes per language across the user's repositories.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsontree --example repo_summary -- response.json
//! ```

use std::{collections::BTreeMap, env, fs, process::ExitCode};

use jsontree::{ParserOptions, Query, parse_with_options, path};

const SAMPLE: &str = r#"{"data":{"user":{"login":"octocat","repositories":{"edges":[
  {"node":{"name":"hello-world","stargazerCount":2500,
    "languages":{"edges":[{"size":1200,"node":{"name":"C"}}]}}},
  {"node":{"name":"linguist","stargazerCount":75,
    "languages":{"edges":[{"size":4000,"node":{"name":"Ruby"}},{"size":20,"node":{"name":"C"}}]}}}
]}}}}"#;

fn main() -> ExitCode {
    let input = match env::args().nth(1) {
        Some(path) => match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("cannot read {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.as_bytes().to_vec(),
    };

    let options = ParserOptions {
        excerpt_len: 48,
        ..ParserOptions::default()
    };
    let root = match parse_with_options(&input, options) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("invalid response: {e}");
            return ExitCode::FAILURE;
        }
    };

    let user = root.pointer(&path!["data", "user"]);
    let edges = user.get("repositories").get("edges");

    let mut stars = 0.0;
    let mut languages: BTreeMap<&str, f64> = BTreeMap::new();
    for i in 0..edges.array_len() {
        let node = edges.get_index(i).get("node");
        stars += node.get("stargazerCount").number_or(0.0);

        let langs = node.get("languages").get("edges");
        for j in 0..langs.array_len() {
            let lang = langs.get_index(j);
            let name = lang.get("node").get("name").str_or("unknown");
            *languages.entry(name).or_default() += lang.get("size").number_or(0.0);
        }
    }

    println!(
        "{}: {} repositories, {stars} stars",
        user.get("login").str_or("(anonymous)"),
        edges.array_len()
    );
    for (name, bytes) in &languages {
        println!("  {name:<12} {bytes:>10} bytes");
    }

    root.release();
    ExitCode::SUCCESS
}
