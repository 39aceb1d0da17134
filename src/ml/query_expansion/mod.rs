//! Relevance-feedback query reformulation.
//!
//! # Architecture
//!
//! - `QueryReformulator` trait: turns one round of judged documents into a new query
//! - `RocchioReformulator`: TF-IDF + Rocchio implementation
//! - `Reformulation`: the new query and the terms it introduced
//!
//! # Example
//!
//! ```
//! use rocchio::ml::query_expansion::{QueryReformulator, RocchioConfig, RocchioReformulator};
//!
//! # fn main() -> rocchio::error::Result<()> {
//! let reformulator = RocchioReformulator::new(RocchioConfig::default())?;
//! let relevant = vec!["Jaguar cat habitat rainforest".to_string()];
//! let non_relevant = vec!["Jaguar car dealership prices".to_string()];
//!
//! let reformulation = reformulator.reformulate("jaguar", &relevant, &non_relevant)?;
//! assert_eq!(reformulation.words.len(), 3);
//! assert!(reformulation.words.contains(&"jaguar".to_string()));
//! # Ok(())
//! # }
//! ```

mod rocchio;
mod r#trait;
mod types;

pub use r#trait::QueryReformulator;
pub use rocchio::{RocchioReformulator, rocchio_update, select_query_terms};
pub use types::{EXPANSION_TERMS, Reformulation, RocchioConfig};
