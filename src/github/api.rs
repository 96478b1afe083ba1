//! GitHub REST API fetchers
//!
//! Four read-only endpoints: repo metadata, branch list, per-branch commits
//! (bounded), and the recursive file tree. Payloads are deserialized with
//! `#[serde(default)]` throughout: a missing field becomes an empty/zero
//! value, never an error. Shape errors (not an object, not an array) are
//! real errors; the caller decides which ones abort the run.

use crate::github::client::HttpFetch;
use crate::github::{RepoSlug, ScanError};
use crate::models::{Branch, Commit, EntryKind, FileEntry, RepositoryInfo};
use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, warn};

const API_ROOT: &str = "https://api.github.com";

fn default_branch_fallback() -> String {
    "main".to_string()
}

#[derive(Deserialize)]
struct RepoPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default = "default_branch_fallback")]
    default_branch: String,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    #[serde(default)]
    watchers_count: u64,
}

#[derive(Deserialize, Default)]
struct BranchPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    commit: HeadRef,
}

#[derive(Deserialize, Default)]
struct HeadRef {
    #[serde(default)]
    sha: String,
}

#[derive(Deserialize, Default)]
struct CommitPayload {
    #[serde(default)]
    sha: String,
    #[serde(default)]
    commit: CommitDetail,
    #[serde(default)]
    parents: Vec<ParentRef>,
}

#[derive(Deserialize, Default)]
struct CommitDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    author: CommitAuthor,
}

#[derive(Deserialize, Default)]
struct CommitAuthor {
    #[serde(default)]
    name: String,
    #[serde(default)]
    date: String,
}

#[derive(Deserialize, Default)]
struct ParentRef {
    #[serde(default)]
    sha: String,
}

#[derive(Deserialize)]
struct TreePayload {
    tree: Option<Vec<TreeEntryPayload>>,
}

#[derive(Deserialize)]
struct TreeEntryPayload {
    #[serde(default)]
    path: String,
    #[serde(rename = "type", default)]
    kind: String,
}

/// Client for one repository's public API surface.
pub struct GitHubApi<H: HttpFetch> {
    http: H,
    slug: RepoSlug,
}

impl<H: HttpFetch> GitHubApi<H> {
    pub fn new(http: H, slug: RepoSlug) -> Self {
        Self { http, slug }
    }

    fn repo_url(&self, suffix: &str) -> String {
        format!(
            "{API_ROOT}/repos/{}/{}{suffix}",
            self.slug.owner, self.slug.repo
        )
    }

    /// Fetch repository metadata. A malformed payload aborts the run.
    pub fn repository_info(&self) -> Result<RepositoryInfo> {
        let body = self.http.get(&self.repo_url(""))?;
        let payload: RepoPayload = serde_json::from_str(&body).map_err(|err| {
            debug!("repository info payload rejected: {err}");
            ScanError::UpstreamParse {
                context: "repository info",
            }
        })?;

        Ok(RepositoryInfo {
            name: payload.name,
            language: payload.language.unwrap_or_else(|| "Unknown".to_string()),
            default_branch: payload.default_branch,
            stars: payload.stargazers_count,
            forks: payload.forks_count,
            watchers: payload.watchers_count,
        })
    }

    /// Fetch the branch list with head shas; commit lists start empty.
    /// A non-array payload aborts the run.
    pub fn branches(&self) -> Result<Vec<Branch>> {
        let body = self.http.get(&self.repo_url("/branches"))?;
        let payload: Vec<BranchPayload> = serde_json::from_str(&body).map_err(|err| {
            debug!("branch list payload rejected: {err}");
            ScanError::UpstreamParse { context: "branches" }
        })?;

        Ok(payload
            .into_iter()
            .map(|branch| Branch {
                name: branch.name,
                head: branch.commit.sha,
                commits: Vec::new(),
            })
            .collect())
    }

    /// Fetch up to `limit` commits for one branch.
    ///
    /// Failures here are tolerated: a branch whose commit list cannot be
    /// fetched or parsed simply keeps an empty history.
    pub fn commits(&self, branch: &str, limit: usize) -> Vec<Commit> {
        let url = self.repo_url(&format!("/commits?sha={branch}&per_page={limit}"));
        let body = match self.http.get(&url) {
            Ok(body) => body,
            Err(err) => {
                warn!("commit fetch for branch '{branch}' failed: {err}");
                return Vec::new();
            }
        };

        let payload: Vec<CommitPayload> = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(err) => {
                debug!("commit payload for branch '{branch}' is not a list: {err}");
                return Vec::new();
            }
        };

        payload
            .into_iter()
            .map(|commit| Commit {
                hash: commit.sha,
                message: commit.commit.message,
                author: commit.commit.author.name,
                date: commit.commit.author.date,
                parent: commit
                    .parents
                    .first()
                    .map(|parent| parent.sha.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Fetch the recursive file tree for the given branch reference.
    ///
    /// Errors here are the one recoverable case at the top level: the run
    /// continues and the report carries a null safety audit.
    pub fn file_tree(&self, reference: &str) -> Result<Vec<FileEntry>> {
        let url = self.repo_url(&format!("/git/trees/{reference}?recursive=1"));
        let body = self.http.get(&url)?;
        let payload: TreePayload = serde_json::from_str(&body).map_err(|err| {
            debug!("file tree payload rejected: {err}");
            ScanError::UpstreamParse {
                context: "file tree",
            }
        })?;
        let entries = payload.tree.ok_or(ScanError::UpstreamParse {
            context: "file tree",
        })?;

        Ok(entries
            .into_iter()
            .filter(|entry| !entry.path.is_empty())
            .map(|entry| FileEntry {
                kind: if entry.kind == "tree" {
                    EntryKind::Tree
                } else {
                    EntryKind::Blob
                },
                path: entry.path,
            })
            .collect())
    }
}
