//! Scan flow contract tests
//!
//! Drives the full fetch-and-assemble pipeline against a canned HTTP stub:
//! happy path, degraded file tree, default-branch resolution, and the fatal
//! upstream-shape cases.

use anyhow::{anyhow, Result};
use gitscope::cli::scan;
use gitscope::github::{GitHubApi, HttpFetch, RepoSlug};
use gitscope::models::RiskStatus;
use gitscope::reporters;
use std::collections::HashMap;

struct StubHttp {
    responses: HashMap<String, String>,
}

impl StubHttp {
    fn new(routes: &[(&str, &str)]) -> Self {
        Self {
            responses: routes
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
        }
    }
}

impl HttpFetch for StubHttp {
    fn get(&self, url: &str) -> Result<String> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("no stub for {url}"))
    }
}

fn demo_api(routes: &[(&str, &str)]) -> GitHubApi<StubHttp> {
    GitHubApi::new(
        StubHttp::new(routes),
        RepoSlug::parse("https://github.com/octo/demo").unwrap(),
    )
}

const REPO_INFO: &str = r#"{
    "name": "demo",
    "language": "TypeScript",
    "default_branch": "develop",
    "stargazers_count": 42,
    "forks_count": 5,
    "watchers_count": 42
}"#;

const BRANCHES: &str = r#"[
    {"name": "develop", "commit": {"sha": "head1"}},
    {"name": "feature", "commit": {"sha": "head2"}}
]"#;

const COMMITS: &str = r#"[{
    "sha": "head1",
    "commit": {"message": "add login", "author": {"name": "Ada", "date": "2024-03-01T12:00:00Z"}},
    "parents": [{"sha": "base1"}]
}]"#;

const TREE: &str = r#"{"tree": [
    {"path": ".gitignore", "type": "blob"},
    {"path": ".env", "type": "blob"},
    {"path": "src", "type": "tree"},
    {"path": "src/index.ts", "type": "blob"}
]}"#;

#[test]
fn full_scan_assembles_report() {
    let api = demo_api(&[
        ("https://api.github.com/repos/octo/demo", REPO_INFO),
        ("https://api.github.com/repos/octo/demo/branches", BRANCHES),
        (
            "https://api.github.com/repos/octo/demo/commits?sha=develop&per_page=10",
            COMMITS,
        ),
        // The tree is fetched for the reported default branch, not "main".
        (
            "https://api.github.com/repos/octo/demo/git/trees/develop?recursive=1",
            TREE,
        ),
    ]);

    let report = scan(&api, 10).unwrap();

    assert_eq!(report.repository_info.name, "demo");
    assert_eq!(report.repository_info.default_branch, "develop");
    assert_eq!(report.branches.len(), 2);
    assert_eq!(report.branches[0].commits.len(), 1);
    assert_eq!(report.branches[0].commits[0].parent, "base1");
    // The feature branch had no stubbed commits endpoint: tolerated as empty.
    assert!(report.branches[1].commits.is_empty());

    let safety = report.safety_audit.as_ref().unwrap();
    // .env (+3) plus folder 'src' without its own .gitignore (+1).
    assert_eq!(safety.risk_score, 4);
    assert_eq!(safety.status, RiskStatus::Moderate);
}

#[test]
fn missing_tree_degrades_to_null_audit() {
    let api = demo_api(&[
        ("https://api.github.com/repos/octo/demo", REPO_INFO),
        ("https://api.github.com/repos/octo/demo/branches", "[]"),
        // No tree route: the fetch fails, the scan continues.
    ]);

    let report = scan(&api, 10).unwrap();
    assert!(report.safety_audit.is_none());

    let json_str = reporters::json::render(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();
    assert!(parsed["safety_audit"].is_null());
    assert_eq!(parsed["repository_info"]["stars"], 42);
}

#[test]
fn malformed_branches_abort_the_scan() {
    let api = demo_api(&[
        ("https://api.github.com/repos/octo/demo", REPO_INFO),
        (
            "https://api.github.com/repos/octo/demo/branches",
            r#"{"message": "API rate limit exceeded"}"#,
        ),
    ]);

    let err = scan(&api, 10).unwrap_err();
    assert!(err.to_string().contains("branches"));
}

#[test]
fn report_written_to_disk_is_valid_json() {
    let api = demo_api(&[
        ("https://api.github.com/repos/octo/demo", REPO_INFO),
        ("https://api.github.com/repos/octo/demo/branches", "[]"),
        (
            "https://api.github.com/repos/octo/demo/git/trees/develop?recursive=1",
            TREE,
        ),
    ]);

    let report = scan(&api, 10).unwrap();
    let json_str = reporters::json::render(&report).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("repo.json");
    std::fs::write(&out, &json_str).unwrap();

    let read_back = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&read_back).unwrap();
    assert_eq!(parsed["safety_audit"]["status"], "Moderate Risk");
}
