//! Tokens produced by text analysis.
//!
//! A [`Token`] is one term candidate cut out of a document or query,
//! together with where it came from. Analysis pipelines pass tokens along as
//! a lazy [`TokenStream`].
//!
//! ```
//! use rocchio::analysis::token::Token;
//!
//! let token = Token::new("Jaguar", 0, 4..10);
//! assert_eq!(token.text, "Jaguar");
//! assert_eq!(token.span, 4..10);
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A term candidate and its location in the analyzed text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    /// Index among the tokens emitted by the tokenizer.
    pub position: usize,
    /// Byte range of the match in the source text. Filters that rewrite
    /// `text` keep the original span.
    pub span: Range<usize>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            span,
        }
    }

    /// A token with no meaningful source location.
    pub fn bare<S: Into<String>>(text: S, position: usize) -> Self {
        Self::new(text, position, 0..0)
    }

    /// Replace the text, keeping position and span.
    pub fn map_text<F: FnOnce(&str) -> String>(mut self, f: F) -> Self {
        self.text = f(&self.text);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

/// A lazy stream of tokens produced by a tokenizer or filter.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
