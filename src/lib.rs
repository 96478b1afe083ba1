//! gitscope - GitHub repository scanner
//!
//! Queries the public GitHub API for a repository's metadata, branch and
//! commit history, and recursive file tree, then emits a consolidated JSON
//! report including a heuristic safety audit: a rule-based pass over the
//! file paths estimating the likelihood that secrets or unmanaged
//! dependency trees are committed.

pub mod audit;
pub mod cli;
pub mod github;
pub mod models;
pub mod reporters;
