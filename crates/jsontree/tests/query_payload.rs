#![expect(missing_docs)]

mod common;

use jsontree::{Query, Value, parse, path};

use crate::common::{C_BYTES, REPOSITORIES, REPOSITORY_COUNT, STARS};

fn repositories(root: &Value) -> Option<&Value> {
    root.pointer(&path!["data", "user", "repositories", "edges"])
}

#[test]
fn totals_from_nested_edges() {
    let root = parse(REPOSITORIES).unwrap();
    let edges = repositories(&root).unwrap();
    assert_eq!(edges.len(), REPOSITORY_COUNT);

    let mut stars = 0.0;
    let mut c_bytes = 0.0;
    for edge in edges.as_array().unwrap() {
        let node = edge.get("node");
        stars += node.get("stargazerCount").number_or(0.0);
        let langs = node.get("languages").get("edges");
        for i in 0..langs.array_len() {
            let lang = langs.get_index(i);
            if lang.get("node").get("name").str_or("") == "C" {
                c_bytes += lang.get("size").number_or(0.0);
            }
        }
    }

    assert!((stars - STARS).abs() < f64::EPSILON);
    assert!((c_bytes - C_BYTES).abs() < f64::EPSILON);
}

#[test]
fn absent_fields_fall_back() {
    let root = parse(REPOSITORIES).unwrap();
    let user = root.get("data").get("user");

    assert_eq!(user.get("login").str_or("?"), "octocat");
    assert_eq!(user.get("bio").str_or("no bio"), "no bio");
    assert_eq!(user.get("company").str_or("none"), "none");
    assert_eq!(user.get("followers").get("totalCount").number_or(0.0), 9001.0);
    assert!(!user.get("isHireable").bool_or(false));

    let fork = repositories(&root).get_index(1).get("node");
    assert!(fork.get("isFork").bool_or(false));
    assert_eq!(fork.get("description").str_or(""), "tab\there");
    assert_eq!(repositories(&root).get_index(10).get("node").str_or("gone"), "gone");
}

#[test]
fn pointer_follows_keys_and_indices() {
    let root = parse(REPOSITORIES).unwrap();
    let name = root.pointer(&path![
        "data", "user", "repositories", "edges", 2, "node", "languages", "edges", 0, "node",
        "name"
    ]);
    assert_eq!(name.and_then(Value::as_str), Some("Ruby"));

    assert!(root.pointer(&path!["data", "user", "login", 0]).is_none());
    assert!(root.pointer(&path!["data", 0]).is_none());
    assert_eq!(root.pointer(&[]), Some(&root));
}

#[test]
fn release_after_extracting() {
    let root = parse(REPOSITORIES).unwrap();
    let login = root.get("data").get("user").get("login").str_or("").to_owned();
    root.release();
    assert_eq!(login, "octocat");
}
