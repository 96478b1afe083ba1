//! Safety heuristic engine
//!
//! A pure, rule-based classifier over the flat list of repository file
//! paths. Performs no I/O and holds no process-wide state; one scan is one
//! call, and callers may run scans in parallel.

pub mod aggregate;
pub mod classifier;
pub mod score;

pub use aggregate::{aggregate, FolderState, GlobalFlags, TreeSummary};

use crate::models::{FileEntry, SafetyReport};

/// Run the full audit over a file tree: one aggregation pass, then scoring.
pub fn audit_tree(entries: &[FileEntry]) -> SafetyReport {
    score::score(&aggregate::aggregate(entries))
}
