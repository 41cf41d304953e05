//! Gate configuration.
//!
//! Settings come from three layers: command-line flags, an optional JSON
//! config file and built-in defaults. Loading and merging are separate so
//! the merge stays a pure function.

mod core;
mod loader;
mod merge;

pub use self::core::{
    ConfigSource, GateConfig, ThresholdConfig, DEFAULT_COLLECTOR, DEFAULT_THRESHOLD,
};
pub use loader::{load_config_file, parse_config, DEFAULT_CONFIG_FILE};
pub use merge::merge_config;
