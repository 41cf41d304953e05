// Export modules for library usage
pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod errors;
pub mod lcov;
pub mod output;
pub mod summary;
pub mod thresholds;

// Re-export commonly used types
pub use crate::collector::{CollectorCommand, CollectorSource, CoverageSource, LcovFileSource};
pub use crate::config::{merge_config, ConfigSource, GateConfig, ThresholdConfig};
pub use crate::errors::{Error, Result};
pub use crate::lcov::{parse_lcov, CoverageRecord};
pub use crate::output::{format_summary, format_summary_json, OutputFormat};
pub use crate::summary::{summarize, CoverageMetric, CoverageMetrics, CoverageSummary, FileSummary};
pub use crate::thresholds::{check_thresholds, ThresholdReport};
