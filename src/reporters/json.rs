//! JSON reporter
//!
//! Outputs the full ScanReport as pretty-printed JSON, suitable for piping
//! to jq or further processing.

use crate::models::ScanReport;
use anyhow::Result;

/// Render the report as pretty-printed JSON.
pub fn render(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
