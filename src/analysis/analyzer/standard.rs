//! The analyzer behind feedback term vectors.
//!
//! Stages, in order:
//!
//! 1. [`RegexTokenizer::terms`]: runs of two or more word characters
//! 2. [`LowercaseFilter`]
//! 3. [`StopFilter`] with the English list
//!
//! ```
//! use rocchio::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms = analyzer.terms("Where do Jaguars live? A guide").unwrap();
//!
//! assert_eq!(terms, vec!["jaguars", "live", "guide"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct StandardAnalyzer(PipelineAnalyzer);

impl StandardAnalyzer {
    pub fn new() -> Result<Self> {
        let pipeline = PipelineAnalyzer::new(Arc::new(RegexTokenizer::terms()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()));
        Ok(StandardAnalyzer(pipeline))
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.0.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
