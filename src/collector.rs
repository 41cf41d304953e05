//! Sources of raw LCOV text.
//!
//! The gate normally runs an external coverage tool and reads its stdout.
//! An existing report on disk can be used instead. Both sit behind
//! [`CoverageSource`] so the pipeline does not care where the text came from.

use crate::errors::{Error, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Something that can produce a complete LCOV report.
pub trait CoverageSource {
    /// Human-readable description for log messages
    fn describe(&self) -> String;

    /// Produce the whole report as text.
    fn read_report(&self) -> Result<String>;
}

/// A collector program and its base arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CollectorCommand {
    /// Split a command line on whitespace into program and arguments.
    ///
    /// ```
    /// use lcovgate::collector::CollectorCommand;
    ///
    /// let command = CollectorCommand::parse("deno coverage --lcov").unwrap();
    /// assert_eq!(command.program, "deno");
    /// assert_eq!(command.args, vec!["coverage", "--lcov"]);
    /// ```
    pub fn parse(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(Error::EmptyCollectorCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Base arguments followed by the include/exclude filters.
    pub fn args_with_filters(&self, include: Option<&str>, exclude: Option<&str>) -> Vec<String> {
        let mut args = self.args.clone();
        if let Some(include) = include {
            args.push(format!("--include={}", include));
        }
        if let Some(exclude) = exclude {
            args.push(format!("--exclude={}", exclude));
        }
        args
    }
}

/// Runs the collector and captures its stdout.
#[derive(Debug, Clone)]
pub struct CollectorSource {
    command: CollectorCommand,
    args: Vec<String>,
}

impl CollectorSource {
    pub fn new(command: CollectorCommand, include: Option<&str>, exclude: Option<&str>) -> Self {
        let args = command.args_with_filters(include, exclude);
        Self { command, args }
    }

    /// Full argument list passed to the collector.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn command_line(&self) -> String {
        std::iter::once(self.command.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl CoverageSource for CollectorSource {
    fn describe(&self) -> String {
        format!("collector `{}`", self.command_line())
    }

    fn read_report(&self) -> Result<String> {
        let program =
            which::which(&self.command.program).map_err(|source| Error::CollectorNotFound {
                program: self.command.program.clone(),
                source,
            })?;

        log::info!("Running {}", self.describe());

        // stderr is inherited so the tool's own diagnostics reach the user
        let output = Command::new(&program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| Error::CollectorSpawn {
                program: self.command.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CollectorFailed {
                command: self.command_line(),
                status: output.status.to_string(),
            });
        }

        let report = String::from_utf8_lossy(&output.stdout).into_owned();
        if report.trim().is_empty() {
            return Err(Error::EmptyCoverage {
                command: self.command_line(),
            });
        }

        log::debug!("Collector produced {} bytes of LCOV", report.len());
        Ok(report)
    }
}

/// Reads a report that was written to disk earlier.
#[derive(Debug, Clone)]
pub struct LcovFileSource {
    path: PathBuf,
}

impl LcovFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CoverageSource for LcovFileSource {
    fn describe(&self) -> String {
        format!("LCOV file {}", self.path.display())
    }

    fn read_report(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| Error::io(&self.path, e))?;
        log::info!("Loaded {}", self.describe());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
