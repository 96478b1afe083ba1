//! Path classification rules
//!
//! Pure predicates over a single file tree path. All matching is
//! case-insensitive substring/regex matching on the raw string; paths are
//! taken exactly as the trees API reports them, with no normalization.

use regex::Regex;
use std::sync::OnceLock;

static SKIP_CONFIG: OnceLock<Regex> = OnceLock::new();
static SENSITIVE: OnceLock<Regex> = OnceLock::new();
static DEPENDENCY_DIR: OnceLock<Regex> = OnceLock::new();

fn skip_config_pattern() -> &'static Regex {
    SKIP_CONFIG.get_or_init(|| Regex::new(r"(?i)(eslint\.config|vite\.config)").unwrap())
}

fn sensitive_pattern() -> &'static Regex {
    SENSITIVE.get_or_init(|| Regex::new(r"(?i)(key|secret|token|config)").unwrap())
}

fn dependency_pattern() -> &'static Regex {
    DEPENDENCY_DIR.get_or_init(|| Regex::new(r"(?i)(node_modules|vendor|deps|packages)").unwrap())
}

/// Known benign tooling config files.
///
/// A matching entry is excluded from every other check, not just the
/// sensitive-name check; otherwise `vite.config.js` would trip the
/// `config` keyword below.
pub fn is_skipped_config(path: &str) -> bool {
    skip_config_pattern().is_match(path)
}

/// Any path containing `.env` anywhere (covers `.env.local`, `config/.env`).
pub fn is_env_file(path: &str) -> bool {
    path.contains(".env")
}

/// Filename keywords that commonly mark credentials or private config.
pub fn is_sensitive(path: &str) -> bool {
    sensitive_pattern().is_match(path)
}

/// Package-manager vendoring conventions (node_modules, vendor, ...).
pub fn is_dependency_dir(segment: &str) -> bool {
    dependency_pattern().is_match(segment)
}

/// Segment contains a literal `.gitignore`.
pub fn is_gitignore(segment: &str) -> bool {
    segment.contains(".gitignore")
}
