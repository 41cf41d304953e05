//! Rendering of coverage summaries.

pub mod json;
pub mod table;

use crate::errors::Result;
use crate::summary::CoverageSummary;

pub use json::format_summary_json;
pub use table::{format_summary, short_file_name};

/// How the summary is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Coverage table
    #[default]
    Terminal,
    /// Pretty-printed JSON summary
    Json,
}

/// Render a summary in the requested format.
pub fn render_summary(summary: &CoverageSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(format_summary(summary)),
        OutputFormat::Json => format_summary_json(summary),
    }
}
