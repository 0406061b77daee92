#![allow(missing_docs)]
#![allow(dead_code)]
#![allow(clippy::needless_raw_string_hashes)]

/// A GitHub GraphQL response listing a user's repositories.
pub const REPOSITORIES: &str = r#"
{
    "data": {
        "user": {
            "login": "octocat",
            "name": "The Octocat",
            "bio": null,
            "followers": { "totalCount": 9001 },
            "repositories": {
                "totalCount": 3,
                "edges": [
                    {
                        "node": {
                            "name": "hello-world",
                            "isFork": false,
                            "stargazerCount": 2500,
                            "languages": {
                                "edges": [
                                    { "size": 1200, "node": { "name": "C" } },
                                    { "size": 300, "node": { "name": "Makefile" } }
                                ]
                            }
                        }
                    },
                    {
                        "node": {
                            "name": "spoon-knife",
                            "isFork": true,
                            "stargazerCount": 12.5e1,
                            "description": "tab\there",
                            "languages": {
                                "edges": [
                                    { "size": 80, "node": { "name": "HTML" } }
                                ]
                            }
                        }
                    },
                    {
                        "node": {
                            "name": "linguist",
                            "isFork": false,
                            "stargazerCount": 75,
                            "languages": {
                                "edges": [
                                    { "size": 4000, "node": { "name": "Ruby" } },
                                    { "size": 20, "node": { "name": "C" } }
                                ]
                            }
                        }
                    }
                ]
            }
        }
    }
}
"#;

/// Total stars, repositories and bytes of C in [`REPOSITORIES`].
pub const STARS: f64 = 2700.0;
pub const REPOSITORY_COUNT: usize = 3;
pub const C_BYTES: f64 = 1220.0;
