use crate::PipelineError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// file formats accepted for configuration files, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(f: &str) -> Result<ConfigFormat, PipelineError> {
        match Path::new(f).extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(PipelineError::ConfigurationError(format!(
                "unsupported file type: {f}"
            ))),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, s: &str) -> Result<T, String> {
        match self {
            ConfigFormat::Toml => toml::from_str(s).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(s).map_err(|e| e.to_string()),
        }
    }
}

/// reads and decodes a `.toml` or `.json` configuration file.
pub fn read_config_file<T: DeserializeOwned>(f: &str) -> Result<T, PipelineError> {
    let format = ConfigFormat::from_path(f)?;
    let s = std::fs::read_to_string(f)
        .map_err(|e| PipelineError::ConfigurationError(format!("failure reading {f}: {e}")))?;
    format
        .decode(&s)
        .map_err(|e| PipelineError::ConfigurationError(format!("failure decoding {f}: {e}")))
}
