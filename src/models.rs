//! Core data models for gitscope
//!
//! These models are used throughout the codebase for representing
//! repository metadata, file tree entries, and the safety audit report.

use serde::{Deserialize, Serialize};

/// Kind of a file tree entry, as reported by the GitHub trees API.
///
/// Anything that is not a directory ("tree") is treated as a blob;
/// submodule pointers behave like files for audit purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
}

/// A single entry from the recursive file tree listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl FileEntry {
    pub fn blob(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Blob,
        }
    }

    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Tree,
        }
    }
}

/// Risk tier derived from the accumulated risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Safe,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskStatus {
    /// Map a final risk score onto its tier.
    ///
    /// Bands are inclusive on the low end; there is no upper bound on High.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=3 => RiskStatus::Safe,
            4..=6 => RiskStatus::Moderate,
            _ => RiskStatus::High,
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskStatus::Safe => write!(f, "Safe"),
            RiskStatus::Moderate => write!(f, "Moderate Risk"),
            RiskStatus::High => write!(f, "High Risk"),
        }
    }
}

/// Result of the safety audit over one file tree.
///
/// Immutable once computed; one per scan invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    pub warnings: Vec<String>,
    pub risk_score: u32,
    pub status: RiskStatus,
}

/// Repository metadata from the GitHub repos endpoint.
///
/// Missing upstream fields are defaulted by the fetch layer
/// (empty string / "Unknown" / 0), never treated as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub language: String,
    pub default_branch: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
}

/// A single commit; `parent` is the first parent sha, or empty for roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub parent: String,
}

/// A branch with its head sha and (bounded) commit history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub head: String,
    pub commits: Vec<Commit>,
}

/// The full consolidated report written to the output file.
///
/// `safety_audit` is `null` when the file tree fetch failed; the run
/// still produces the metadata and branch sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub repository_info: RepositoryInfo,
    pub branches: Vec<Branch>,
    pub safety_audit: Option<SafetyReport>,
}
