use super::core::{ConfigSource, GateConfig, ThresholdConfig, DEFAULT_COLLECTOR, DEFAULT_THRESHOLD};

/// Coalesce command-line settings over config-file settings over defaults.
///
/// Pure: neither source is loaded here, so callers decide where each
/// layer comes from.
///
/// ```
/// use lcovgate::config::{merge_config, ConfigSource};
///
/// let cli = ConfigSource { lines: Some(90.0), ..Default::default() };
/// let file = ConfigSource { lines: Some(50.0), branches: Some(60.0), ..Default::default() };
///
/// let config = merge_config(&cli, &file);
/// assert_eq!(config.thresholds.lines, Some(90.0));
/// assert_eq!(config.thresholds.branches, Some(60.0));
/// assert_eq!(config.thresholds.functions, Some(100.0));
/// ```
pub fn merge_config(cli: &ConfigSource, file: &ConfigSource) -> GateConfig {
    GateConfig {
        thresholds: ThresholdConfig {
            lines: Some(cli.lines.or(file.lines).unwrap_or(DEFAULT_THRESHOLD)),
            functions: Some(cli.functions.or(file.functions).unwrap_or(DEFAULT_THRESHOLD)),
            branches: Some(cli.branches.or(file.branches).unwrap_or(DEFAULT_THRESHOLD)),
            per_file: cli.per_file.or(file.per_file).unwrap_or(false),
            include: cli.include.clone().or_else(|| file.include.clone()),
            exclude: cli.exclude.clone().or_else(|| file.exclude.clone()),
        },
        collector: cli
            .collector
            .clone()
            .or_else(|| file.collector.clone())
            .unwrap_or_else(|| DEFAULT_COLLECTOR.to_string()),
    }
}
