//! Runtime configuration from the environment

use std::env;
use std::str::FromStr;

use tracing::Level;

/// How responses are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: Level,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: Level::WARN,
            output: OutputFormat::Json,
        }
    }
}

impl Config {
    /// Read `CCUNITS_LOG` and `CCUNITS_OUTPUT`. Unparseable values fall back
    /// to the defaults and are returned as warnings for the caller to log
    /// once a subscriber exists.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        if let Some(level) = lookup("CCUNITS_LOG") {
            match level.parse::<Level>() {
                Ok(level) => config.log_level = level,
                Err(e) => warnings.push(format!("CCUNITS_LOG={}: {}", level, e)),
            }
        }

        if let Some(output) = lookup("CCUNITS_OUTPUT") {
            match output.parse::<OutputFormat>() {
                Ok(output) => config.output = output,
                Err(e) => warnings.push(format!("CCUNITS_OUTPUT: {}", e)),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = config_from(&[]);
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let (config, warnings) = config_from(&[("CCUNITS_LOG", "debug"), ("CCUNITS_OUTPUT", "TEXT")]);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.output, OutputFormat::Text);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_bad_values_warn() {
        let (config, warnings) = config_from(&[("CCUNITS_LOG", "loud"), ("CCUNITS_OUTPUT", "xml")]);
        assert_eq!(config.log_level, Level::WARN);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(warnings.len(), 2);
    }
}
