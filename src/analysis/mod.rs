//! Text analysis for feedback documents and queries.
//!
//! Tokenizers split raw text into tokens, token filters normalise or drop
//! them, and analyzers chain both into one pipeline.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
