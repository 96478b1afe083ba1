//! Single-pass aggregation of the file tree
//!
//! Folds the flat entry list into global flags, per-file warnings (in input
//! order), and per-root-folder state. Root folder identity is the first path
//! segment before the first `/`.

use crate::audit::classifier;
use crate::models::{EntryKind, FileEntry};
use std::collections::BTreeMap;

/// Weight attached to a `.env` warning at emission time.
const ENV_FILE_WEIGHT: u32 = 3;
/// Weight attached to a sensitive-name warning at emission time.
const SENSITIVE_FILE_WEIGHT: u32 = 2;

/// Repository-wide flags, set once during the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    pub has_env_file: bool,
    pub has_root_gitignore: bool,
    pub has_sensitive_file: bool,
}

/// Per-root-folder markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FolderState {
    pub has_gitignore: bool,
    pub has_dependency_dir: bool,
}

/// Everything the scorer needs, produced by one pass over the tree.
///
/// Folders are keyed in a `BTreeMap` so iteration (and therefore the
/// folder-warning order) is deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct TreeSummary {
    pub flags: GlobalFlags,
    pub folders: BTreeMap<String, FolderState>,
    /// (message, weight) pairs for warnings tied to individual entries,
    /// in input order.
    pub file_warnings: Vec<(String, u32)>,
}

/// Fold the full entry list into a [`TreeSummary`].
///
/// Entries matching the skip-config pattern contribute to nothing: no
/// flags, no warnings, no folder registration.
pub fn aggregate(entries: &[FileEntry]) -> TreeSummary {
    let mut summary = TreeSummary::default();

    for entry in entries {
        let path = entry.path.as_str();

        if classifier::is_skipped_config(path) {
            continue;
        }

        if classifier::is_env_file(path) {
            summary.flags.has_env_file = true;
            summary.file_warnings.push((
                format!(".env file detected ({path}) — may contain secrets."),
                ENV_FILE_WEIGHT,
            ));
        }

        if path == ".gitignore" {
            summary.flags.has_root_gitignore = true;
        }

        if classifier::is_sensitive(path) {
            summary.flags.has_sensitive_file = true;
            summary.file_warnings.push((
                format!("Potential sensitive file: {path}"),
                SENSITIVE_FILE_WEIGHT,
            ));
        }

        match path.split_once('/') {
            None => {
                // Root-level entry: only directories register as root folders.
                if entry.kind == EntryKind::Tree {
                    let state = summary.folders.entry(path.to_string()).or_default();
                    if classifier::is_dependency_dir(path) {
                        state.has_dependency_dir = true;
                    }
                }
            }
            Some((root, relative)) => {
                let state = summary.folders.entry(root.to_string()).or_default();
                if classifier::is_gitignore(relative) {
                    state.has_gitignore = true;
                }
                if classifier::is_dependency_dir(relative) {
                    state.has_dependency_dir = true;
                }
            }
        }
    }

    summary
}
