//! Case folding.
//!
//! Vocabulary terms are compared case-sensitively, so every analyzer that
//! feeds a term vector lowercases before anything else looks at the text.
//!
//! ```
//! use rocchio::analysis::token::Token;
//! use rocchio::analysis::token_filter::Filter;
//! use rocchio::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let tokens = vec![Token::bare("Jaguar", 0), Token::bare("XE", 1)];
//! let terms: Vec<String> = LowercaseFilter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(terms, vec!["jaguar", "xe"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases every token using Unicode case mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| token.map_text(str::to_lowercase))))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
