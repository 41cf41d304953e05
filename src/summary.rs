//! Coverage summary aggregation.
//!
//! Reduces parsed LCOV records into per-file metrics and a project total.
//! Percentages are always derived from counts: a file total is never an
//! average of file percentages.

use crate::lcov::CoverageRecord;
use serde::Serialize;
use std::collections::HashMap;

/// One of the three coverage dimensions reported by LCOV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageKind {
    Lines,
    Functions,
    Branches,
}

impl CoverageKind {
    /// All kinds, in the order thresholds are checked.
    pub const ALL: [CoverageKind; 3] = [
        CoverageKind::Lines,
        CoverageKind::Functions,
        CoverageKind::Branches,
    ];

    /// Capitalized name used in threshold messages.
    pub fn label(self) -> &'static str {
        match self {
            CoverageKind::Lines => "Lines",
            CoverageKind::Functions => "Functions",
            CoverageKind::Branches => "Branches",
        }
    }
}

/// Total, covered and percentage for one coverage kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoverageMetric {
    pub total: u64,
    pub covered: u64,
    pub percentage: f64,
}

impl CoverageMetric {
    /// Build a metric from counts. Nothing to measure counts as fully covered.
    ///
    /// ```
    /// use lcovgate::summary::CoverageMetric;
    ///
    /// assert_eq!(CoverageMetric::from_counts(4, 3).percentage, 75.0);
    /// assert_eq!(CoverageMetric::from_counts(0, 7).percentage, 100.0);
    /// ```
    pub fn from_counts(total: u64, covered: u64) -> Self {
        let percentage = if total > 0 {
            covered as f64 / total as f64 * 100.0
        } else {
            100.0
        };
        Self {
            total,
            covered,
            percentage,
        }
    }

    /// Sum the counts of two metrics and recompute the percentage.
    fn accumulate(self, other: CoverageMetric) -> Self {
        Self::from_counts(
            self.total.saturating_add(other.total),
            self.covered.saturating_add(other.covered),
        )
    }
}

impl Default for CoverageMetric {
    fn default() -> Self {
        Self::from_counts(0, 0)
    }
}

/// Lines, functions and branches metrics for a file or the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CoverageMetrics {
    pub lines: CoverageMetric,
    pub functions: CoverageMetric,
    pub branches: CoverageMetric,
}

impl CoverageMetrics {
    /// Metrics for a single record, taken from its reported counters.
    pub fn from_record(record: &CoverageRecord) -> Self {
        Self {
            lines: CoverageMetric::from_counts(record.lines.found, record.lines.hit),
            functions: CoverageMetric::from_counts(record.functions.found, record.functions.hit),
            branches: CoverageMetric::from_counts(record.branches.found, record.branches.hit),
        }
    }

    pub fn get(&self, kind: CoverageKind) -> &CoverageMetric {
        match kind {
            CoverageKind::Lines => &self.lines,
            CoverageKind::Functions => &self.functions,
            CoverageKind::Branches => &self.branches,
        }
    }

    fn accumulate(self, other: &CoverageMetrics) -> Self {
        Self {
            lines: self.lines.accumulate(other.lines),
            functions: self.functions.accumulate(other.functions),
            branches: self.branches.accumulate(other.branches),
        }
    }
}

/// Metrics for one source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    pub file: String,
    #[serde(flatten)]
    pub metrics: CoverageMetrics,
}

/// Per-file metrics plus the aggregated total.
///
/// Files keep the position of their first appearance in the report. When a
/// path appears again its metrics are replaced, not merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CoverageSummary {
    pub total: CoverageMetrics,
    files: Vec<FileSummary>,
    /// Position of each path in `files`
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl CoverageSummary {
    /// Per-file entries in report order.
    pub fn files(&self) -> &[FileSummary] {
        &self.files
    }

    /// Look up the metrics recorded for a file path.
    pub fn file(&self, path: &str) -> Option<&CoverageMetrics> {
        self.index
            .get(path)
            .map(|&position| &self.files[position].metrics)
    }

    fn upsert_file(&mut self, file: &str, metrics: CoverageMetrics) {
        match self.index.get(file) {
            Some(&position) => {
                log::debug!("Duplicate coverage record for {}; keeping the last one", file);
                self.files[position].metrics = metrics;
            }
            None => {
                self.index.insert(file.to_string(), self.files.len());
                self.files.push(FileSummary {
                    file: file.to_string(),
                    metrics,
                });
            }
        }
    }
}

/// Aggregate parsed records into a [`CoverageSummary`].
///
/// Every record contributes to the total, including records whose path
/// repeats an earlier one; only the per-file entry is overwritten.
pub fn summarize(records: &[CoverageRecord]) -> CoverageSummary {
    records
        .iter()
        .fold(CoverageSummary::default(), |mut summary, record| {
            let metrics = CoverageMetrics::from_record(record);
            summary.upsert_file(&record.file, metrics);
            summary.total = summary.total.accumulate(&metrics);
            summary
        })
}
