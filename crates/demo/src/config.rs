//! Environment-driven configuration.

use std::path::PathBuf;

use syntaxlab_observability::{LogConfig, LogFormat};

/// Showcase file target when `SYNTAXLAB_OUTPUT` is unset.
pub const DEFAULT_OUTPUT: &str = "demo.txt";

pub const OUTPUT_VAR: &str = "SYNTAXLAB_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "SYNTAXLAB_LOG_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Where the showcase writes the person file.
    pub output_path: PathBuf,
    pub log: LogConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            log: LogConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unusable values fall back to defaults
    /// with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup(OUTPUT_VAR) {
            Some(path) if !path.trim().is_empty() => config.output_path = PathBuf::from(path),
            Some(_) => {
                tracing::warn!("{OUTPUT_VAR} is empty; using {DEFAULT_OUTPUT}");
            }
            None => {}
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log.format = format,
                Err(e) => tracing::warn!("{e}; using default log format"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = DemoConfig::from_lookup(|_| None);
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.output_path, PathBuf::from("demo.txt"));
        assert_eq!(config.log.format, LogFormat::Pretty);
    }

    #[test]
    fn reads_output_and_format() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (OUTPUT_VAR, "/tmp/out.txt"),
            (LOG_FORMAT_VAR, "json"),
        ]));
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.txt"));
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (OUTPUT_VAR, "   "),
            (LOG_FORMAT_VAR, "yaml"),
        ]));
        assert_eq!(config, DemoConfig::default());
    }
}
