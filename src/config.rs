//! Application configuration.
//!
//! Everything has a default; a JSON file may override any subset:
//!
//! ```json
//! {
//!   "feedback": { "max_iterations": 5 },
//!   "rocchio": { "beta": 0.8, "gamma": 0.1 },
//!   "search": { "timeout_secs": 10 }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RocchioError};
use crate::feedback::FeedbackConfig;
use crate::ml::query_expansion::RocchioConfig;
use crate::search::GoogleSearchConfig;

/// Top-level configuration for a feedback session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feedback: FeedbackConfig,
    pub rocchio: RocchioConfig,
    pub search: GoogleSearchConfig,
}

impl AppConfig {
    /// Load a configuration file; missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            RocchioError::invalid_config(format!("{}: {e}", path.display()))
        })
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.feedback.validate()?;
        self.rocchio.validate()?;
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.feedback.max_iterations, 10);
        assert_eq!(config.rocchio.beta, 0.75);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"feedback": {{"max_iterations": 4}}, "rocchio": {{"gamma": 0.3}}}}"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.feedback.max_iterations, 4);
        assert_eq!(config.feedback.num_results, 10);
        assert_eq!(config.rocchio.gamma, 0.3);
        assert_eq!(config.rocchio.alpha, 1.0);
        assert_eq!(config.search, GoogleSearchConfig::default());
    }

    #[test]
    fn test_from_file_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, RocchioError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppConfig::from_file("/nonexistent/rocchio.json").unwrap_err();
        assert!(matches!(err, RocchioError::Io(_)));
    }
}
