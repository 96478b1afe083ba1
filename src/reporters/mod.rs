//! Output reporters for scan results
//!
//! Two formats:
//! - `json` - the consolidated report document written to the output file
//! - `text` - terminal rendering of the safety audit

pub mod json;
pub mod text;
