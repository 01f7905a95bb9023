use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::provision::ModelSource;

/// Config file read when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "energy.json";

const DEFAULT_MODEL_URL: &str = "https://drive.google.com/uc?id=1MFWofVrOsjvggSsbq1QvqTKt9MzuQzgt";
const DEFAULT_MODEL_PATH: &str = "final_energy_consumption_model.json";
const DEFAULT_LOG_PATH: &str = "energy-tui.log";

/// Application settings. Every key is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Where to download the model artifact from when it is not cached.
    pub model_url: String,
    /// Local cache location of the model artifact.
    pub model_path: PathBuf,
    pub connect_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
    /// File the binary writes its logs to while the terminal UI is active.
    pub log_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_url: DEFAULT_MODEL_URL.into(),
            model_path: DEFAULT_MODEL_PATH.into(),
            connect_timeout_secs: 10,
            fetch_timeout_secs: 120,
            log_path: DEFAULT_LOG_PATH.into(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// With `Some(path)` the file must exist. With `None` the
    /// [`DEFAULT_CONFIG_PATH`] is used if present, otherwise all defaults.
    ///
    /// # Errors
    /// Returns a human-readable string if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, String> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

        Self::from_json(&content).map_err(|e| format!("'{}': {e}", path.display()))
    }

    /// Parses and validates a configuration document.
    ///
    /// # Errors
    /// Returns a human-readable string if the JSON is invalid.
    pub fn from_json(content: &str) -> Result<Self, String> {
        let config: Self =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

        if config.model_url.trim().is_empty() {
            return Err("model_url must not be empty".into());
        }
        if config.model_path.as_os_str().is_empty() {
            return Err("model_path must not be empty".into());
        }
        if config.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than zero".into());
        }
        if config.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be greater than zero".into());
        }

        Ok(config)
    }

    pub fn model_source(&self) -> ModelSource {
        ModelSource::new(self.model_url.clone(), self.model_path.clone())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            config.model_path,
            PathBuf::from("final_energy_consumption_model.json")
        );
    }

    #[test]
    fn overrides_only_given_keys() {
        let config = AppConfig::from_json(
            r#"{ "model_path": "models/energy.json", "fetch_timeout_secs": 5 }"#,
        )
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("models/energy.json"));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
        assert_eq!(config.model_url, DEFAULT_MODEL_URL);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(AppConfig::from_json(r#"{ "model_uri": "x" }"#).is_err());
    }

    #[test]
    fn rejects_zero_fetch_timeout() {
        let err = AppConfig::from_json(r#"{ "fetch_timeout_secs": 0 }"#).unwrap_err();
        assert_eq!(err, "fetch_timeout_secs must be greater than zero");
    }

    #[test]
    fn rejects_zero_connect_timeout() {
        let err = AppConfig::from_json(r#"{ "connect_timeout_secs": 0 }"#).unwrap_err();
        assert_eq!(err, "connect_timeout_secs must be greater than zero");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("does/not/exist.json"))).unwrap_err();
        assert!(err.starts_with("cannot read 'does/not/exist.json'"));
    }

    #[test]
    fn model_source_follows_config() {
        let config = AppConfig::default();
        let source = config.model_source();

        assert_eq!(source.url(), DEFAULT_MODEL_URL);
        assert_eq!(source.path(), Path::new(DEFAULT_MODEL_PATH));
    }
}
