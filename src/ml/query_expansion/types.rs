//! Configuration and result types for query reformulation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RocchioError};

/// Number of terms a reformulation adds on top of the original words.
pub const EXPANSION_TERMS: usize = 2;

/// Rocchio weights: `q1 = alpha * q0 + beta * centroid_r - gamma * centroid_n`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocchioConfig {
    /// Weight of the original query vector.
    pub alpha: f64,
    /// Weight of the relevant centroid.
    pub beta: f64,
    /// Weight of the non-relevant centroid (subtracted).
    pub gamma: f64,
}

impl Default for RocchioConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.75,
            gamma: 0.15,
        }
    }
}

impl RocchioConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta), ("gamma", self.gamma)] {
            if !value.is_finite() {
                return Err(RocchioError::invalid_config(format!(
                    "rocchio.{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of one reformulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reformulation {
    /// New query string: the words joined by spaces, with a trailing space.
    pub query: String,
    /// Words of the new query in order.
    pub words: Vec<String>,
    /// Words not present in the previous query, in query order.
    pub expansion_terms: Vec<String>,
}

impl Reformulation {
    pub fn from_words(words: Vec<String>, expansion_terms: Vec<String>) -> Self {
        let query = words.iter().map(|w| format!("{w} ")).collect();
        Self {
            query,
            words,
            expansion_terms,
        }
    }

    /// The terms announced as augmenting the query.
    pub fn augmenting_terms(&self) -> &[String] {
        let n = self.expansion_terms.len().min(EXPANSION_TERMS);
        &self.expansion_terms[..n]
    }
}
