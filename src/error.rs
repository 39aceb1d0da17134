//! Error types for the Rocchio feedback engine.
//!
//! All fallible operations in this crate return [`Result`], whose error side is
//! the [`RocchioError`] enum.
//!
//! # Examples
//!
//! ```
//! use rocchio::error::{RocchioError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RocchioError::invalid_config("precision must lie in [0, 1]"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Rocchio operations.
#[derive(Error, Debug)]
pub enum RocchioError {
    /// I/O errors (console, config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, vocabulary building, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid user-supplied configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Errors reported by the search service
    #[error("Search error: {0}")]
    Search(String),

    /// The judged feedback cannot support a reformulation.
    ///
    /// This is recoverable: the feedback loop treats it as a normal stop.
    #[error("Insufficient feedback: {0}")]
    InsufficientFeedback(String),

    /// Transport errors from the HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A failure wrapped with context at the command boundary.
    ///
    /// Displays the whole context chain, outermost first.
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with RocchioError.
pub type Result<T> = std::result::Result<T, RocchioError>;

impl RocchioError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RocchioError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        RocchioError::InvalidConfig(msg.into())
    }

    /// Create a new search error.
    pub fn search<S: Into<String>>(msg: S) -> Self {
        RocchioError::Search(msg.into())
    }

    /// Create a new insufficient feedback error.
    pub fn insufficient_feedback<S: Into<String>>(msg: S) -> Self {
        RocchioError::InsufficientFeedback(msg.into())
    }

    /// Whether the feedback loop may recover from this error by stopping cleanly.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RocchioError::InsufficientFeedback(_))
    }
}
