//! Threshold evaluation.
//!
//! Compares a [`CoverageSummary`] against a [`ThresholdConfig`]. A result
//! below a threshold is not an error: it is collected as a message and the
//! caller decides what the exit status becomes.

use crate::config::ThresholdConfig;
use crate::summary::{CoverageKind, CoverageMetrics, CoverageSummary};

/// Outcome of checking a summary against thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThresholdReport {
    /// True when no threshold was violated
    pub passed: bool,
    /// One message per violation, global ones first
    pub failures: Vec<String>,
}

impl ThresholdReport {
    fn from_failures(failures: Vec<String>) -> Self {
        Self {
            passed: failures.is_empty(),
            failures,
        }
    }
}

fn threshold_for(config: &ThresholdConfig, kind: CoverageKind) -> Option<f64> {
    match kind {
        CoverageKind::Lines => config.lines,
        CoverageKind::Functions => config.functions,
        CoverageKind::Branches => config.branches,
    }
}

/// Round to two decimals with ties going up, so 3.125 shows as 3.13.
fn two_decimals(percentage: f64) -> f64 {
    (percentage * 100.0).round() / 100.0
}

/// Messages for every configured kind whose percentage is below threshold.
fn violations<'a>(
    metrics: &'a CoverageMetrics,
    config: &'a ThresholdConfig,
) -> impl Iterator<Item = String> + 'a {
    CoverageKind::ALL.into_iter().filter_map(move |kind| {
        let threshold = threshold_for(config, kind)?;
        let percentage = metrics.get(kind).percentage;
        (percentage < threshold).then(|| {
            format!(
                "{} coverage {:.2}% is below threshold {}%",
                kind.label(),
                two_decimals(percentage),
                threshold
            )
        })
    })
}

/// Check a coverage summary against the configured thresholds.
///
/// Totals are checked first. With `per_file` set, each file is then checked
/// in summary order and its messages carry a `File <path>: ` prefix.
/// Meeting a threshold exactly passes.
///
/// ```
/// use lcovgate::config::ThresholdConfig;
/// use lcovgate::lcov::parse_lcov;
/// use lcovgate::summary::summarize;
/// use lcovgate::thresholds::check_thresholds;
///
/// let summary = summarize(&parse_lcov("SF:a.rs\nLF:4\nLH:3\nend_of_record\n"));
/// let config = ThresholdConfig { lines: Some(80.0), ..Default::default() };
///
/// let report = check_thresholds(&summary, &config);
/// assert!(!report.passed);
/// assert_eq!(report.failures, vec!["Lines coverage 75.00% is below threshold 80%"]);
/// ```
pub fn check_thresholds(summary: &CoverageSummary, config: &ThresholdConfig) -> ThresholdReport {
    let mut failures: Vec<String> = violations(&summary.total, config).collect();

    if config.per_file {
        for entry in summary.files() {
            failures.extend(
                violations(&entry.metrics, config)
                    .map(|message| format!("File {}: {}", entry.file, message)),
            );
        }
    }

    ThresholdReport::from_failures(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcov::CoverageRecord;
    use crate::summary::summarize;
    use pretty_assertions::assert_eq;

    fn record(file: &str, lines: (u64, u64), functions: (u64, u64), branches: (u64, u64)) -> CoverageRecord {
        let mut record = CoverageRecord::new(file);
        (record.lines.found, record.lines.hit) = lines;
        (record.functions.found, record.functions.hit) = functions;
        (record.branches.found, record.branches.hit) = branches;
        record
    }

    fn all_thresholds(value: f64) -> ThresholdConfig {
        ThresholdConfig {
            lines: Some(value),
            functions: Some(value),
            branches: Some(value),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_threshold_passes() {
        let summary = summarize(&[record("a.rs", (10, 10), (2, 2), (0, 0))]);

        let report = check_thresholds(&summary, &all_thresholds(100.0));

        assert!(report.passed);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_just_below_threshold_fails() {
        // 99999/100000 = 99.999%
        let summary = summarize(&[record("a.rs", (100_000, 99_999), (0, 0), (0, 0))]);

        let report = check_thresholds(&summary, &all_thresholds(100.0));

        assert!(!report.passed);
        assert_eq!(
            report.failures,
            vec!["Lines coverage 100.00% is below threshold 100%".to_string()]
        );
    }

    #[test]
    fn test_percentage_ties_round_up() {
        // 1/32 = 3.125%
        let summary = summarize(&[record("a.ts", (32, 1), (0, 0), (0, 0))]);
        let config = ThresholdConfig {
            lines: Some(50.0),
            ..Default::default()
        };

        let report = check_thresholds(&summary, &config);

        assert_eq!(
            report.failures,
            vec!["Lines coverage 3.13% is below threshold 50%".to_string()]
        );
    }

    #[test]
    fn test_unset_thresholds_are_not_checked() {
        let summary = summarize(&[record("a.rs", (10, 0), (10, 0), (10, 0))]);

        let report = check_thresholds(&summary, &ThresholdConfig::default());

        assert!(report.passed);
    }

    #[test]
    fn test_global_failures_in_kind_order() {
        let summary = summarize(&[record("a.rs", (3, 1), (4, 1), (8, 1))]);

        let report = check_thresholds(&summary, &all_thresholds(80.5));

        assert_eq!(
            report.failures,
            vec![
                "Lines coverage 33.33% is below threshold 80.5%".to_string(),
                "Functions coverage 25.00% is below threshold 80.5%".to_string(),
                "Branches coverage 12.50% is below threshold 80.5%".to_string(),
            ]
        );
    }

    #[test]
    fn test_per_file_failures_follow_global_ones() {
        let summary = summarize(&[
            record("src/good.rs", (10, 10), (1, 1), (0, 0)),
            record("src/bad.rs", (10, 5), (2, 0), (0, 0)),
        ]);
        let config = ThresholdConfig {
            lines: Some(80.0),
            functions: Some(80.0),
            per_file: true,
            ..Default::default()
        };

        let report = check_thresholds(&summary, &config);

        assert!(!report.passed);
        assert_eq!(
            report.failures,
            vec![
                "Lines coverage 75.00% is below threshold 80%".to_string(),
                "Functions coverage 33.33% is below threshold 80%".to_string(),
                "File src/bad.rs: Lines coverage 50.00% is below threshold 80%".to_string(),
                "File src/bad.rs: Functions coverage 0.00% is below threshold 80%".to_string(),
            ]
        );
    }

    #[test]
    fn test_per_file_disabled_only_checks_totals() {
        let summary = summarize(&[
            record("a.rs", (100, 100), (0, 0), (0, 0)),
            record("b.rs", (10, 5), (0, 0), (0, 0)),
        ]);
        let config = ThresholdConfig {
            lines: Some(90.0),
            ..Default::default()
        };

        let report = check_thresholds(&summary, &config);

        // Total is 105/110 = 95.45%, b.rs alone would fail.
        assert!(report.passed);
    }
}
