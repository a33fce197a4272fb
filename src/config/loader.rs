//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::schema::RoutingConfig;
use crate::config::validation::{validate_config, validate_routes, ValidationError};
use crate::routing::Route;

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RoutingConfig, ConfigError> {
    let config: RoutingConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn read_config(path: &Path) -> Result<RoutingConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RoutingConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(path = ?path, routes = config.routes.len(), "Route definitions loaded");
    Ok(config)
}

/// Load a definitions file and build its routes, in file order.
pub fn load_routes(path: &Path) -> Result<Vec<Route<Value>>, ConfigError> {
    let config = read_config(path)?;
    let routes = build_routes(&config)?;

    tracing::info!(path = ?path, routes = routes.len(), "Route definitions loaded");
    Ok(routes)
}

/// Validate and build every route of a parsed configuration.
pub fn build_routes(config: &RoutingConfig) -> Result<Vec<Route<Value>>, ConfigError> {
    validate_routes(config).map_err(ConfigError::Validation)
}
