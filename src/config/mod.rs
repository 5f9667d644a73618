//! Configuration system for mconditions
//!
//! A single YAML file layered over built-in defaults, with environment
//! variable overrides on top.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, LoggerConfig, OutputFormat};

use crate::models::ConditionSeverity;

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "output" => Ok(config.output.to_string()),
        "defaultSeverity" => Ok(config.default_severity.to_string()),
        "logger.level" => Ok(config.logger.level.clone()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "output" => {
            config.output = value
                .parse()
                .map_err(|e: String| anyhow::anyhow!("output must be 'yaml' or 'json': {}", e))?;
        }
        "defaultSeverity" => {
            config.default_severity =
                ConditionSeverity::from_str_case_insensitive(value).ok_or_else(|| {
                    anyhow::anyhow!(
                        "defaultSeverity must be one of 'Error', 'Warning', 'Info' or empty, got '{}'",
                        value
                    )
                })?;
        }
        "logger.level" => {
            if value.trim().is_empty() {
                return Err(anyhow::anyhow!("logger.level must not be empty"));
            }
            config.logger.level = value.to_string();
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_value() {
        let config = Config::default();
        assert_eq!(get_config_value(&config, "output").unwrap(), "yaml");
        assert_eq!(get_config_value(&config, "defaultSeverity").unwrap(), "Error");
        assert!(get_config_value(&config, "ui.skin").is_err());
    }

    #[test]
    fn test_set_config_value() {
        let mut config = Config::default();
        set_config_value(&mut config, "output", "JSON").unwrap();
        set_config_value(&mut config, "defaultSeverity", "warning").unwrap();
        set_config_value(&mut config, "logger.level", "debug").unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.default_severity, ConditionSeverity::Warning);
        assert_eq!(config.logger.level, "debug");

        assert!(set_config_value(&mut config, "output", "xml").is_err());
        assert!(set_config_value(&mut config, "defaultSeverity", "fatal").is_err());
        assert!(set_config_value(&mut config, "logger.level", " ").is_err());
    }
}
