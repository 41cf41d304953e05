use crate::config::{ConfigSource, DEFAULT_CONFIG_FILE};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lcovgate")]
#[command(about = "Summarize LCOV coverage and fail the build below thresholds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Minimum line coverage percentage
    #[arg(long)]
    pub lines: Option<f64>,

    /// Minimum function coverage percentage
    #[arg(long)]
    pub functions: Option<f64>,

    /// Minimum branch coverage percentage
    #[arg(long)]
    pub branches: Option<f64>,

    /// Also apply the thresholds to every file
    #[arg(long = "per-file")]
    pub per_file: bool,

    /// Only report files matching this pattern (passed to the collector)
    #[arg(long)]
    pub include: Option<String>,

    /// Skip files matching this pattern (passed to the collector)
    #[arg(long)]
    pub exclude: Option<String>,

    /// JSON config file with default settings
    #[arg(long = "config-file", env = "LCOVGATE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Command that prints LCOV to stdout
    #[arg(long)]
    pub collector: Option<String>,

    /// Read an existing LCOV report instead of running the collector
    #[arg(long = "lcov-file", visible_alias = "lcov")]
    pub lcov_file: Option<PathBuf>,

    /// Output format for the summary
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Settings given on the command line, as one layer for merging.
    ///
    /// An absent `--per-file` flag is left unset so the config file can
    /// still turn per-file checking on.
    pub fn config_source(&self) -> ConfigSource {
        ConfigSource {
            lines: self.lines,
            functions: self.functions,
            branches: self.branches,
            per_file: self.per_file.then_some(true),
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            collector: self.collector.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_thresholds_and_filters() {
        let cli = Cli::try_parse_from([
            "lcovgate",
            "--lines",
            "80",
            "--branches=72.5",
            "--per-file",
            "--include",
            "^src/",
        ])
        .unwrap();

        assert_eq!(
            cli.config_source(),
            ConfigSource {
                lines: Some(80.0),
                branches: Some(72.5),
                per_file: Some(true),
                include: Some("^src/".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["lcovgate"]).unwrap();

        assert_eq!(cli.config_source(), ConfigSource::default());
        assert_eq!(cli.format, OutputFormat::Terminal);
        assert_eq!(cli.verbosity, 0);
        assert!(cli.lcov_file.is_none());
    }

    #[test]
    fn test_verbosity_and_format() {
        let cli = Cli::try_parse_from(["lcovgate", "-vv", "--format", "json"]).unwrap();

        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_non_numeric_threshold_is_rejected() {
        assert!(Cli::try_parse_from(["lcovgate", "--lines", "most"]).is_err());
    }
}
