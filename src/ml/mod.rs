//! Vector-space models behind query reformulation.
//!
//! [`tfidf`] turns judged documents into term vectors; [`query_expansion`]
//! moves the query vector with the Rocchio update and reads a new query back
//! out of it.

pub mod query_expansion;
pub mod tfidf;

pub use query_expansion::*;
pub use tfidf::{TermDictionary, TermVector, TermVectorizer};
