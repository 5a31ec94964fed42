//! Application configuration loaded from environment variables.

use std::str::FromStr;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
/// - `SHOP_METRICS` — render dispatch metrics at exit (default: `false`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
    pub metrics: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|f| f.parse().ok())
                .unwrap_or(defaults.log_format),
            metrics: lookup("SHOP_METRICS")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.metrics),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.metrics);
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        assert_eq!(Config::from_lookup(lookup_from(&[])), Config::default());
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("RUST_LOG", "debug,events=trace"),
            ("LOG_FORMAT", "JSON"),
            ("SHOP_METRICS", "true"),
        ]));
        assert_eq!(config.log_level, "debug,events=trace");
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.metrics);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_FORMAT", "xml"),
            ("SHOP_METRICS", "nope"),
        ]));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.metrics);
    }
}
