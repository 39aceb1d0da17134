//! Feedback loop settings.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RocchioError};
use crate::search::google::MAX_RESULTS_PER_REQUEST;

/// Settings for one feedback session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Stop once a round reaches this precision. Must lie in [0, 1].
    pub desired_precision: f64,
    /// Results requested and judged per round.
    pub num_results: usize,
    /// Hard cap on feedback rounds.
    pub max_iterations: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            desired_precision: 1.0,
            num_results: 10,
            max_iterations: 10,
        }
    }
}

impl FeedbackConfig {
    pub fn with_precision(desired_precision: f64) -> Self {
        Self {
            desired_precision,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.desired_precision) {
            return Err(RocchioError::invalid_config(format!(
                "precision must be between 0 and 1, got {}",
                self.desired_precision
            )));
        }
        if self.num_results == 0 || self.num_results > MAX_RESULTS_PER_REQUEST {
            return Err(RocchioError::invalid_config(format!(
                "num_results must be between 1 and {MAX_RESULTS_PER_REQUEST}, got {}",
                self.num_results
            )));
        }
        if self.max_iterations == 0 {
            return Err(RocchioError::invalid_config(
                "max_iterations must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FeedbackConfig::default();
        assert_eq!(config.num_results, 10);
        assert_eq!(config.max_iterations, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_bounds() {
        assert!(FeedbackConfig::with_precision(0.0).validate().is_ok());
        assert!(FeedbackConfig::with_precision(1.0).validate().is_ok());
        assert!(FeedbackConfig::with_precision(1.01).validate().is_err());
        assert!(FeedbackConfig::with_precision(-0.1).validate().is_err());
        assert!(FeedbackConfig::with_precision(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_counts() {
        let config = FeedbackConfig {
            num_results: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = FeedbackConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
