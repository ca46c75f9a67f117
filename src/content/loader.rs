//! Loader for the RON controller configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{CURRENT_SCHEMA_VERSION, ControllerConfig};

/// Error type for configuration loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse configuration text. `file_name` only labels errors.
pub fn parse_config(contents: &str, file_name: &str) -> Result<ControllerConfig, ConfigLoadError> {
    let config: ControllerConfig = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    if config.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(ConfigLoadError {
            file: file_name.to_string(),
            message: format!(
                "schema_version {} is newer than supported {}",
                config.schema_version, CURRENT_SCHEMA_VERSION
            ),
        });
    }

    Ok(config)
}

/// Load the controller configuration from a RON file.
pub fn load_config_file(path: &Path) -> Result<ControllerConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_config(&contents, &file_name)
}
