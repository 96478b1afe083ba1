//! GitHub REST API boundary
//!
//! Everything that talks to the network lives here. The audit core never
//! sees a URL; it consumes the plain data these fetchers return.

pub mod api;
pub mod client;

pub use api::GitHubApi;
pub use client::{HttpFetch, UreqClient};

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors raised at the fetch boundary.
///
/// The classifier and scorer never fail; only URL validation and payload
/// parsing can. Whether a parse failure aborts the run or degrades it is
/// the caller's decision (repo info and branches abort, the file tree
/// degrades to a report without a safety audit).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid GitHub repository URL: {url}")]
    InvalidUrl { url: String },

    #[error("unexpected {context} payload from GitHub")]
    UpstreamParse { context: &'static str },
}

static SLUG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn slug_pattern() -> &'static Regex {
    SLUG_PATTERN.get_or_init(|| Regex::new(r"github\.com/([^/\s]+)/([^/\s]+)").unwrap())
}

/// An owner/repo pair extracted from a repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl RepoSlug {
    /// Parse `github.com/<owner>/<repo>` out of a URL.
    ///
    /// Accepts https prefixes and trailing path noise; a `.git` suffix is
    /// stripped from the repo name. Anything else is fatal before the
    /// first fetch.
    pub fn parse(url: &str) -> Result<Self, ScanError> {
        let captures = slug_pattern()
            .captures(url)
            .ok_or_else(|| ScanError::InvalidUrl {
                url: url.to_string(),
            })?;

        let owner = captures[1].to_string();
        let mut repo = captures[2].to_string();
        if let Some(stripped) = repo.strip_suffix(".git") {
            repo = stripped.to_string();
        }

        if repo.is_empty() {
            return Err(ScanError::InvalidUrl {
                url: url.to_string(),
            });
        }

        Ok(Self { owner, repo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let slug = RepoSlug::parse("https://github.com/rust-lang/cargo").unwrap();
        assert_eq!(slug.owner, "rust-lang");
        assert_eq!(slug.repo, "cargo");
    }

    #[test]
    fn test_parse_strips_git_suffix_and_trailing_slash() {
        let slug = RepoSlug::parse("https://github.com/rust-lang/cargo.git").unwrap();
        assert_eq!(slug.repo, "cargo");

        let slug = RepoSlug::parse("github.com/rust-lang/cargo/").unwrap();
        assert_eq!(slug.repo, "cargo");
    }

    #[test]
    fn test_parse_rejects_non_github_urls() {
        assert!(RepoSlug::parse("https://gitlab.com/foo/bar").is_err());
        assert!(RepoSlug::parse("not a url").is_err());
        assert!(RepoSlug::parse("https://github.com/only-owner").is_err());
    }
}
