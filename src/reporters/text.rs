//! Text (terminal) reporter for the safety audit

use crate::models::{RiskStatus, SafetyReport};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Tier colors (ANSI escape codes)
fn status_color(status: RiskStatus) -> &'static str {
    match status {
        RiskStatus::Safe => "\x1b[32m",     // Green
        RiskStatus::Moderate => "\x1b[33m", // Yellow
        RiskStatus::High => "\x1b[31m",     // Red
    }
}

/// Render the safety audit as formatted terminal output.
pub fn render(report: &SafetyReport, repo_name: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{BOLD}=== Safety Report for {repo_name} ==={RESET}\n"
    ));
    for warning in &report.warnings {
        out.push_str(&format!(" {DIM}-{RESET} {warning}\n"));
    }

    let color = status_color(report.status);
    out.push_str(&format!(
        "\nRisk Score: {BOLD}{} / 10{RESET}\n",
        report.risk_score
    ));
    out.push_str(&format!(
        "Status: {color}{BOLD}{}{RESET}\n",
        report.status
    ));

    out
}
