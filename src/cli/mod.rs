//! CLI definition and the scan driver

use crate::audit;
use crate::github::{GitHubApi, HttpFetch, RepoSlug, UreqClient};
use crate::models::ScanReport;
use crate::reporters;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// gitscope - GitHub repository scanner
///
/// Fetches repository metadata, branch history, and the file tree, runs a
/// commit-safety audit over the paths, and writes one consolidated JSON
/// report.
#[derive(Parser, Debug)]
#[command(name = "gitscope")]
#[command(
    version,
    about = "Scan a GitHub repository: metadata, branches, commits, and a commit-safety audit",
    after_help = "\
Examples:
  gitscope https://github.com/rust-lang/cargo
  gitscope https://github.com/rust-lang/cargo --limit 25 -o cargo.json
  gitscope                                  Prompt for the URL interactively"
)]
pub struct Cli {
    /// GitHub repository URL (prompted for interactively when omitted)
    pub url: Option<String>,

    /// Maximum commits fetched per branch
    #[arg(long, default_value = "10")]
    pub limit: usize,

    /// Output file for the JSON report
    #[arg(long, short = 'o', default_value = "repo.json")]
    pub output: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

/// Run a full scan for the given CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    let url = match cli.url {
        Some(url) => url,
        None => prompt_for_url()?,
    };
    let slug = RepoSlug::parse(&url)?;

    let report = scan(&GitHubApi::new(UreqClient::new(), slug), cli.limit)?;

    if let Some(safety) = &report.safety_audit {
        print!(
            "{}",
            reporters::text::render(safety, &report.repository_info.name)
        );
    }

    let json = reporters::json::render(&report)?;
    std::fs::write(&cli.output, json)
        .with_context(|| format!("writing report to {}", cli.output.display()))?;
    println!(
        "\nExported repository data + safety report to {}",
        cli.output.display()
    );

    Ok(())
}

/// Fetch everything and assemble the report document.
///
/// Repo info and branch failures abort; a file tree failure only drops the
/// safety audit from the report.
pub fn scan<H: HttpFetch>(api: &GitHubApi<H>, limit: usize) -> Result<ScanReport> {
    info!("Fetching repository info...");
    let repository_info = api.repository_info()?;

    info!("Fetching branches...");
    let mut branches = api.branches()?;
    for branch in &mut branches {
        info!("Fetching commits for branch: {}", branch.name);
        branch.commits = api.commits(&branch.name, limit);
    }

    info!("Performing safety scan...");
    let safety_audit = match api.file_tree(&repository_info.default_branch) {
        Ok(entries) => Some(audit::audit_tree(&entries)),
        Err(err) => {
            warn!("Could not fetch file tree, skipping safety audit: {err}");
            None
        }
    };

    Ok(ScanReport {
        repository_info,
        branches,
        safety_audit,
    })
}

fn prompt_for_url() -> Result<String> {
    print!("Enter GitHub repository URL: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let url = input.trim().to_string();
    if url.is_empty() {
        bail!("no repository URL provided");
    }
    Ok(url)
}
