use crate::collector::{CollectorCommand, CollectorSource, CoverageSource, LcovFileSource};
use crate::config::{GateConfig, ThresholdConfig};
use crate::lcov::parse_lcov;
use crate::output::{render_summary, OutputFormat};
use crate::summary::{summarize, CoverageSummary};
use crate::thresholds::{check_thresholds, ThresholdReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct GateOptions {
    pub config: GateConfig,
    /// Read this report instead of running the collector
    pub lcov_file: Option<PathBuf>,
    pub format: OutputFormat,
}

pub struct GateOutcome {
    pub summary: CoverageSummary,
    /// Summary rendered in the requested format
    pub rendered: String,
    pub report: ThresholdReport,
}

/// Pick the coverage source for a run.
pub fn build_source(options: &GateOptions) -> Result<Box<dyn CoverageSource>> {
    let thresholds = &options.config.thresholds;

    if let Some(path) = &options.lcov_file {
        if thresholds.include.is_some() || thresholds.exclude.is_some() {
            log::info!("include/exclude only apply to the collector; ignoring them for --lcov-file");
        }
        return Ok(Box::new(LcovFileSource::new(path)));
    }

    let command = CollectorCommand::parse(&options.config.collector)?;
    Ok(Box::new(CollectorSource::new(
        command,
        thresholds.include.as_deref(),
        thresholds.exclude.as_deref(),
    )))
}

/// Parse, summarize, render and check a report from `source`.
///
/// Failing to obtain the report is an error. Failing a threshold is not:
/// it shows up in the returned [`ThresholdReport`].
pub fn evaluate_source(
    source: &dyn CoverageSource,
    thresholds: &ThresholdConfig,
    format: OutputFormat,
) -> Result<GateOutcome> {
    let report_text = source
        .read_report()
        .with_context(|| format!("Failed to obtain coverage from {}", source.describe()))?;

    let records = parse_lcov(&report_text);
    let summary = summarize(&records);
    log::info!(
        "Coverage: lines {:.2}%, functions {:.2}%, branches {:.2}% across {} files",
        summary.total.lines.percentage,
        summary.total.functions.percentage,
        summary.total.branches.percentage,
        summary.files().len()
    );

    let rendered = render_summary(&summary, format).context("Failed to render coverage summary")?;
    let report = check_thresholds(&summary, thresholds);

    Ok(GateOutcome {
        summary,
        rendered,
        report,
    })
}

/// Run the coverage gate end to end.
pub fn gate_coverage(options: &GateOptions) -> Result<GateOutcome> {
    let source = build_source(options)?;
    evaluate_source(source.as_ref(), &options.config.thresholds, options.format)
}
