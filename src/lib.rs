//! # Rocchio
//!
//! Interactive query expansion with relevance feedback.
//!
//! A query is sent to a web search API, the top results are judged by a
//! user, and the query is expanded with two new terms picked by the Rocchio
//! algorithm over TF-IDF vectors of the judged results. The loop repeats
//! until the desired precision is reached or no further progress is possible.
//!
//! ## Layout
//!
//! - [`analysis`]: tokenization, lowercasing and stop word removal
//! - [`ml`]: TF-IDF term vectors and Rocchio query reformulation
//! - [`search`]: search result model and the Google Custom Search client
//! - [`feedback`]: judges, loop state and the feedback loop controller
//! - [`cli`]: command line arguments and console output

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod ml;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
