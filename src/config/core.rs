use serde::Deserialize;

/// Threshold used for every coverage kind when no source sets one
pub const DEFAULT_THRESHOLD: f64 = 100.0;

/// Collector command line used when no source sets one
pub const DEFAULT_COLLECTOR: &str = "deno coverage --lcov";

/// One layer of partially specified settings.
///
/// Both the config file and the command line produce a `ConfigSource`;
/// [`super::merge_config`] coalesces them with the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSource {
    #[serde(default)]
    pub lines: Option<f64>,
    #[serde(default)]
    pub functions: Option<f64>,
    #[serde(default)]
    pub branches: Option<f64>,
    #[serde(default)]
    pub per_file: Option<bool>,
    #[serde(default)]
    pub include: Option<String>,
    #[serde(default)]
    pub exclude: Option<String>,
    #[serde(default)]
    pub collector: Option<String>,
}

/// Minimum coverage percentages to enforce.
///
/// A `None` threshold leaves that kind ungated. `include` and `exclude`
/// only shape what the collector reports; evaluation ignores them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdConfig {
    pub lines: Option<f64>,
    pub functions: Option<f64>,
    pub branches: Option<f64>,
    pub per_file: bool,
    pub include: Option<String>,
    pub exclude: Option<String>,
}

/// Fully resolved settings for one gate run.
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    pub thresholds: ThresholdConfig,
    /// Collector command line, program first
    pub collector: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig {
                lines: Some(DEFAULT_THRESHOLD),
                functions: Some(DEFAULT_THRESHOLD),
                branches: Some(DEFAULT_THRESHOLD),
                ..ThresholdConfig::default()
            },
            collector: DEFAULT_COLLECTOR.to_string(),
        }
    }
}
