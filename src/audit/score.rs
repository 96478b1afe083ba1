//! Risk scoring
//!
//! Turns a [`TreeSummary`] into the final [`SafetyReport`]. Rules live in
//! ordered tables of (predicate, message, weight) so new heuristics are a
//! table row, not new control flow. Scoring is a pure fold over the emitted
//! (warning, weight) pairs; there is no shared mutable counter.

use crate::audit::aggregate::{FolderState, GlobalFlags, TreeSummary};
use crate::models::{RiskStatus, SafetyReport};

/// A repository-wide rule, triggered by the global flags.
struct GlobalRule {
    triggered: fn(&GlobalFlags) -> bool,
    message: &'static str,
    weight: u32,
}

/// A per-root-folder rule.
struct FolderRule {
    triggered: fn(&FolderState) -> bool,
    render: fn(&str) -> String,
    weight: u32,
}

const GLOBAL_RULES: &[GlobalRule] = &[
    GlobalRule {
        triggered: |flags| !flags.has_root_gitignore,
        message: "No .gitignore file found — sensitive files may be committed.",
        weight: 2,
    },
    GlobalRule {
        triggered: |flags| !flags.has_env_file,
        message: "No .env file found (good security practice).",
        weight: 0,
    },
    GlobalRule {
        triggered: |flags| !flags.has_sensitive_file,
        message: "No suspicious files containing 'key', 'token', or 'secret' in name.",
        weight: 0,
    },
];

const FOLDER_RULES: &[FolderRule] = &[
    FolderRule {
        triggered: |state| !state.has_gitignore,
        render: |name| format!("Folder '{name}' does not contain its own .gitignore file."),
        weight: 1,
    },
    FolderRule {
        triggered: |state| state.has_dependency_dir,
        render: |name| {
            format!("Folder '{name}' includes a dependency directory (e.g., node_modules/vendor).")
        },
        weight: 2,
    },
];

/// Produce the safety report for one aggregated tree.
///
/// Warning order: per-file warnings (input order), then global rules in
/// table order, then folder rules per folder in name order. The final score
/// does not depend on folder order, only the warning list does.
pub fn score(summary: &TreeSummary) -> SafetyReport {
    let mut findings: Vec<(String, u32)> = summary.file_warnings.clone();

    for rule in GLOBAL_RULES {
        if (rule.triggered)(&summary.flags) {
            findings.push((rule.message.to_string(), rule.weight));
        }
    }

    for (name, state) in &summary.folders {
        for rule in FOLDER_RULES {
            if (rule.triggered)(state) {
                findings.push(((rule.render)(name), rule.weight));
            }
        }
    }

    let risk_score = findings.iter().map(|(_, weight)| weight).sum();
    let warnings = findings.into_iter().map(|(message, _)| message).collect();

    SafetyReport {
        warnings,
        risk_score,
        status: RiskStatus::from_score(risk_score),
    }
}
