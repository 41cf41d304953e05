use std::fs;
use std::path::Path;

use super::core::ConfigSource;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = ".lcovgaterc.json";

/// Read the raw contents of a config file
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(path)
}

/// Pure function to parse config from a JSON string
pub fn parse_config(contents: &str) -> Result<ConfigSource, String> {
    serde_json::from_str::<ConfigSource>(contents).map_err(|e| format!("invalid JSON: {}", e))
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // A missing config file is the normal case
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}. Using defaults.",
            config_path.display(),
            error
        );
    } else {
        log::debug!("No config file at {}", config_path.display());
    }
}

/// Load a config file, falling back to an empty source.
///
/// A missing, unreadable or malformed file never fails the run.
pub fn load_config_file(config_path: &Path) -> ConfigSource {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return ConfigSource::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            log::warn!(
                "Ignoring config file {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            ConfigSource::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config_camel_case_keys() {
        let config = parse_config(
            r#"{"lines": 80, "functions": 75.5, "perFile": true, "include": "src/", "collector": "cat lcov.info"}"#,
        )
        .unwrap();

        assert_eq!(config.lines, Some(80.0));
        assert_eq!(config.functions, Some(75.5));
        assert_eq!(config.branches, None);
        assert_eq!(config.per_file, Some(true));
        assert_eq!(config.include.as_deref(), Some("src/"));
        assert_eq!(config.exclude, None);
        assert_eq!(config.collector.as_deref(), Some("cat lcov.info"));
    }

    #[test]
    fn test_parse_config_ignores_unknown_keys() {
        let config = parse_config(r#"{"branches": 50, "reporter": "html"}"#).unwrap();
        assert_eq!(config.branches, Some(50.0));
    }

    #[test]
    fn test_parse_config_rejects_invalid_json() {
        let result = parse_config("{ lines: 80 ");
        assert!(result.unwrap_err().contains("invalid JSON"));
    }

    #[test]
    fn test_load_config_file_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        let config = load_config_file(&dir.path().join(DEFAULT_CONFIG_FILE));
        assert_eq!(config, ConfigSource::default());
    }

    #[test]
    fn test_load_config_file_invalid_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "not json at all").unwrap();

        assert_eq!(load_config_file(&path), ConfigSource::default());
    }

    #[test]
    fn test_load_config_file_wrong_type_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"lines": "eighty"}"#).unwrap();

        assert_eq!(load_config_file(&path), ConfigSource::default());
    }

    #[test]
    fn test_read_config_file_returns_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"lines": 90}"#).unwrap();

        assert_eq!(read_config_file(&path).unwrap(), r#"{"lines": 90}"#);
        assert_eq!(
            read_config_file(&dir.path().join("absent.json"))
                .unwrap_err()
                .kind(),
            std::io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_load_config_file_reads_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, r#"{"lines": 90, "exclude": "test"}"#).unwrap();

        let config = load_config_file(&path);
        assert_eq!(config.lines, Some(90.0));
        assert_eq!(config.exclude.as_deref(), Some("test"));
    }
}
